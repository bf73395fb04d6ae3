pub const TEAM_COLORS: [&str; 4] = ["#ff1744", "#2979ff", "#00e676", "#ffab00"];

/// Used once the palette runs out
pub const TEAM_NEUTRAL_COLOR: &str = "#ffffff";

pub struct TeamColors;

impl TeamColors {
    pub fn for_index(idx: usize) -> &'static str {
        TEAM_COLORS.get(idx).copied().unwrap_or(TEAM_NEUTRAL_COLOR)
    }
}

pub struct TeamNames;

impl TeamNames {
    /// Team A, Team B, ..., Team Z, Team AA, Team AB, ...
    pub fn for_index(idx: usize) -> String {
        format!("Team {}", Self::letters(idx))
    }

    fn letters(idx: usize) -> String {
        let mut letters = Vec::new();
        let mut n = idx + 1;

        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }

        letters.iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_then_neutral() {
        assert_eq!(TeamColors::for_index(0), "#ff1744");
        assert_eq!(TeamColors::for_index(3), "#ffab00");
        assert_eq!(TeamColors::for_index(4), TEAM_NEUTRAL_COLOR);
        assert_eq!(TeamColors::for_index(40), TEAM_NEUTRAL_COLOR);
    }

    #[test]
    fn test_names() {
        assert_eq!(TeamNames::for_index(0), "Team A");
        assert_eq!(TeamNames::for_index(1), "Team B");
        assert_eq!(TeamNames::for_index(25), "Team Z");
        assert_eq!(TeamNames::for_index(26), "Team AA");
        assert_eq!(TeamNames::for_index(27), "Team AB");
    }
}
