//! Profile domain — username, progression, coin balance, achievements.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::serde_util::{lenient_number, null_as_default};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A player profile as last returned by the server. Never mutated locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub xp: u64,
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub level: u32,
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub coins: i64,
    /// achievement id → earned
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub achievements: BTreeMap<String, bool>,
}

impl Profile {
    /// Ids of earned achievements, sorted.
    pub fn earned_achievements(&self) -> Vec<&str> {
        self.achievements
            .iter()
            .filter(|(_, earned)| **earned)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Level as displayed: a fresh account reporting `0` shows level 1.
    pub fn display_level(&self) -> u32 {
        self.level.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialize_full() {
        let json = r#"{
            "username": "ada",
            "xp": 1200,
            "level": 4,
            "coins": 350,
            "achievements": {"first_win": true, "combo_10": false, "all_dots": true}
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "ada");
        assert_eq!(profile.xp, 1200);
        assert_eq!(profile.level, 4);
        assert_eq!(profile.coins, 350);
        assert_eq!(profile.earned_achievements(), ["all_dots", "first_win"]);
    }

    #[test]
    fn test_profile_tolerates_missing_and_null_fields() {
        let profile: Profile =
            serde_json::from_str(r#"{"username": "bo", "xp": null, "achievements": null}"#).unwrap();
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.level, 0);
        assert_eq!(profile.display_level(), 1);
        assert!(profile.earned_achievements().is_empty());
    }

    #[test]
    fn test_profile_accepts_fractional_and_negative_numbers() {
        let profile: Profile = serde_json::from_str(
            r#"{"username": "ada", "xp": 12.5, "level": 2.0, "coins": -4.5}"#,
        )
        .unwrap();
        assert_eq!(profile.xp, 12);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.coins, -4);

        let profile: Profile = serde_json::from_str(r#"{"xp": -30, "level": -1}"#).unwrap();
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.display_level(), 1);
    }
}
