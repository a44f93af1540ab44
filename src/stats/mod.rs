//! Derived-metrics engine
//!
//! - `aggregate`: weekly matchups folded into roster series and player rows
//! - `ranking`: medians, all-play records, power scores and standings
//! - `simulation`: Monte Carlo random-schedule win expectations
//! - `draft_value`: pick scoring against position-tiered curves
//! - `projections`: batched rest-of-season projection totals
//! - `service`: the async entry points that fetch and wire these together

pub mod aggregate;
pub mod draft_value;
pub mod projections;
pub mod ranking;
pub mod service;
pub mod simulation;

pub use aggregate::{PlayerContribution, RosterSeries};
pub use ranking::RankedRoster;
pub use service::StatsService;
pub use simulation::SimulationResult;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
