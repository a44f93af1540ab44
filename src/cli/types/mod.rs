//! Type-safe wrappers and enums for Sleeper Fantasy Football data.

pub mod ids;
pub mod position;
pub mod scoring;
pub mod time;

pub use ids::{LeagueId, PlayerId, RosterId};
pub use position::Position;
pub use scoring::ScoringFormat;
pub use time::{Season, Week};
