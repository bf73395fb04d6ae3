use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const ATTRIBUTE_MAX_VALUE: u8 = 99;
pub const ATTRIBUTE_DEFAULT_VALUE: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physical,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 6] = [
        AttributeKind::Pace,
        AttributeKind::Shooting,
        AttributeKind::Passing,
        AttributeKind::Dribbling,
        AttributeKind::Defending,
        AttributeKind::Physical,
    ];

    /// Three-letter label shown on player cards
    pub fn get_short_name(&self) -> &'static str {
        match self {
            AttributeKind::Pace => "RIT",
            AttributeKind::Shooting => "FIN",
            AttributeKind::Passing => "PAS",
            AttributeKind::Dribbling => "DRI",
            AttributeKind::Defending => "DEF",
            AttributeKind::Physical => "FIS",
        }
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

/// Six card attributes, each on a 0-99 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defending: u8,
    pub physical: u8,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        PlayerAttributes::uniform(ATTRIBUTE_DEFAULT_VALUE)
    }
}

impl PlayerAttributes {
    pub fn new(
        pace: u8,
        shooting: u8,
        passing: u8,
        dribbling: u8,
        defending: u8,
        physical: u8,
    ) -> Self {
        PlayerAttributes {
            pace,
            shooting,
            passing,
            dribbling,
            defending,
            physical,
        }
    }

    pub fn uniform(value: u8) -> Self {
        PlayerAttributes::new(value, value, value, value, value, value)
    }

    pub fn get(&self, kind: AttributeKind) -> u8 {
        match kind {
            AttributeKind::Pace => self.pace,
            AttributeKind::Shooting => self.shooting,
            AttributeKind::Passing => self.passing,
            AttributeKind::Dribbling => self.dribbling,
            AttributeKind::Defending => self.defending,
            AttributeKind::Physical => self.physical,
        }
    }

    pub fn set(&mut self, kind: AttributeKind, value: u8) {
        let slot = match kind {
            AttributeKind::Pace => &mut self.pace,
            AttributeKind::Shooting => &mut self.shooting,
            AttributeKind::Passing => &mut self.passing,
            AttributeKind::Dribbling => &mut self.dribbling,
            AttributeKind::Defending => &mut self.defending,
            AttributeKind::Physical => &mut self.physical,
        };

        *slot = value;
    }

    /// Values in declaration order, matching `AttributeKind::ALL`
    pub fn values(&self) -> [u8; 6] {
        [
            self.pace,
            self.shooting,
            self.passing,
            self.dribbling,
            self.defending,
            self.physical,
        ]
    }

    pub fn is_valid(&self) -> bool {
        self.values().iter().all(|&v| v <= ATTRIBUTE_MAX_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seventy_everywhere() {
        let attributes = PlayerAttributes::default();
        assert_eq!(attributes.values(), [70; 6]);
    }

    #[test]
    fn test_get_set_roundtrip_per_kind() {
        let mut attributes = PlayerAttributes::default();

        for (idx, kind) in AttributeKind::ALL.iter().enumerate() {
            attributes.set(*kind, idx as u8 * 10);
        }

        assert_eq!(attributes.values(), [0, 10, 20, 30, 40, 50]);
        assert_eq!(attributes.get(AttributeKind::Defending), 40);
    }

    #[test]
    fn test_is_valid() {
        let mut attributes = PlayerAttributes::uniform(99);
        assert!(attributes.is_valid());

        attributes.physical = 100;
        assert!(!attributes.is_valid());
    }

    #[test]
    fn test_short_names() {
        assert_eq!(AttributeKind::Pace.to_string(), "RIT");
        assert_eq!(AttributeKind::Physical.get_short_name(), "FIS");
    }
}
