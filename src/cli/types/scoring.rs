//! Scoring format variants and their Sleeper stat keys.

use crate::error::SleeperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points-per-reception flavour of a league's scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScoringFormat {
    Standard,
    HalfPpr,
    #[default]
    Ppr,
}

impl ScoringFormat {
    /// Map a points-per-reception value to a format: 0 is standard, 0.5 is
    /// half-PPR and anything else is treated as full PPR.
    pub fn from_reception_points(rec: f64) -> Self {
        if rec == 0.0 {
            ScoringFormat::Standard
        } else if rec == 0.5 {
            ScoringFormat::HalfPpr
        } else {
            ScoringFormat::Ppr
        }
    }

    /// Stat key holding fantasy points, e.g. `pts_half_ppr`.
    pub fn points_key(&self) -> &'static str {
        match self {
            ScoringFormat::Standard => "pts_std",
            ScoringFormat::HalfPpr => "pts_half_ppr",
            ScoringFormat::Ppr => "pts_ppr",
        }
    }

    /// Stat key holding the overall rank.
    pub fn rank_key(&self) -> &'static str {
        match self {
            ScoringFormat::Standard => "rank_std",
            ScoringFormat::HalfPpr => "rank_half_ppr",
            ScoringFormat::Ppr => "rank_ppr",
        }
    }

    /// Stat key holding the rank within the player's position.
    pub fn position_rank_key(&self) -> &'static str {
        match self {
            ScoringFormat::Standard => "pos_rank_std",
            ScoringFormat::HalfPpr => "pos_rank_half_ppr",
            ScoringFormat::Ppr => "pos_rank_ppr",
        }
    }
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoringFormat::Standard => "std",
            ScoringFormat::HalfPpr => "half_ppr",
            ScoringFormat::Ppr => "ppr",
        };
        f.write_str(s)
    }
}

impl FromStr for ScoringFormat {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "std" | "standard" => Ok(ScoringFormat::Standard),
            "half" | "half_ppr" | "half-ppr" => Ok(ScoringFormat::HalfPpr),
            "ppr" | "full" => Ok(ScoringFormat::Ppr),
            other => other
                .parse::<f64>()
                .map(ScoringFormat::from_reception_points)
                .map_err(|_| SleeperError::InvalidScoring {
                    value: s.to_string(),
                }),
        }
    }
}
