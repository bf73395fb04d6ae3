use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCardTier {
    Gold,
    Silver,
    Bronze,
}

impl PlayerCardTier {
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            80.. => PlayerCardTier::Gold,
            60..=79 => PlayerCardTier::Silver,
            _ => PlayerCardTier::Bronze,
        }
    }

    /// Color used to print the overall number on the card
    pub fn overall_color_hex(&self) -> &'static str {
        match self {
            PlayerCardTier::Gold => "#fbbf24",
            PlayerCardTier::Silver => "#e5e7eb",
            PlayerCardTier::Bronze => "#92400e",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PlayerCardTier::from_overall(99), PlayerCardTier::Gold);
        assert_eq!(PlayerCardTier::from_overall(80), PlayerCardTier::Gold);
        assert_eq!(PlayerCardTier::from_overall(79), PlayerCardTier::Silver);
        assert_eq!(PlayerCardTier::from_overall(60), PlayerCardTier::Silver);
        assert_eq!(PlayerCardTier::from_overall(59), PlayerCardTier::Bronze);
        assert_eq!(PlayerCardTier::from_overall(0), PlayerCardTier::Bronze);
    }

    #[test]
    fn test_overall_colors() {
        assert_eq!(PlayerCardTier::Gold.overall_color_hex(), "#fbbf24");
        assert_eq!(PlayerCardTier::Bronze.overall_color_hex(), "#92400e");
    }
}
