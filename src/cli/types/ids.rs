//! ID types for Sleeper Fantasy Football.

use crate::error::{Result, SleeperError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper hands league IDs out as 18-digit decimal strings; they fit in a u64
/// and are rendered back as plain decimal in request paths.
///
/// # Examples
///
/// ```rust
/// use sleeper_ffl::LeagueId;
///
/// let league_id: LeagueId = "992195707941212160".parse().unwrap();
/// assert_eq!(league_id.as_u64(), 992195707941212160);
/// assert_eq!(league_id.to_string(), "992195707941212160");
/// ```
///
/// Serializes as a decimal string; deserializes from a string or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeagueId(pub u64);

impl LeagueId {
    /// Create a new LeagueId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for LeagueId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LeagueId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(id) => Ok(Self(id)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl FromStr for LeagueId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Sleeper player IDs.
///
/// Most players are numeric ("4046") but team defenses use the team
/// abbreviation ("DET"), so the ID stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SleeperError::validation("player_id", "must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Roster slot number within a league (1-based on Sleeper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RosterId(pub u32);

impl RosterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_parses_sleeper_format() {
        let id: LeagueId = "992195707941212160".parse().unwrap();
        assert_eq!(id.as_u64(), 992_195_707_941_212_160);
        assert_eq!(id.to_string(), "992195707941212160");
    }

    #[test]
    fn test_league_id_rejects_garbage() {
        assert!("not-a-league".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_league_id_serializes_as_string() {
        let id = LeagueId::new(992195707941212160);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"992195707941212160\"");
        assert_eq!(serde_json::from_str::<LeagueId>(&json).unwrap(), id);

        assert_eq!(serde_json::from_str::<LeagueId>("4242").unwrap(), LeagueId::new(4242));
        assert!(serde_json::from_str::<LeagueId>("\"abc\"").is_err());
    }

    #[test]
    fn test_player_id_keeps_team_defense_codes() {
        let id: PlayerId = " DET ".parse().unwrap();
        assert_eq!(id.as_str(), "DET");
        assert!("   ".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let player = PlayerId::new("4046");
        assert_eq!(serde_json::to_string(&player).unwrap(), "\"4046\"");

        let roster: RosterId = serde_json::from_str("7").unwrap();
        assert_eq!(roster, RosterId::new(7));
    }
}
