//! Projections command implementation

use std::fmt::Write;

use super::common::{live_provider, to_json};
use crate::{
    stats::{projections::PlayerProjection, StatsService},
    PlayerId, Result, ScoringFormat, Season, Week,
};

/// Handle the projections command
pub async fn handle_projections(
    player_ids: Vec<PlayerId>,
    season: Season,
    week: Week,
    scoring: ScoringFormat,
    no_cache: bool,
    as_json: bool,
) -> Result<()> {
    let service = StatsService::new(live_provider(no_cache)?);
    // tarpaulin::skip - HTTP call, tested via integration tests
    let results = service
        .fetch_projections(&player_ids, season, week, scoring)
        .await;

    if as_json {
        println!("{}", to_json(&results)?);
    } else {
        print!("{}", render_projections(&results));
    }
    Ok(())
}

pub fn render_projections(results: &[PlayerProjection]) -> String {
    let mut out = String::new();
    for p in results {
        let position = if p.position.is_empty() { "?" } else { p.position.as_str() };
        let _ = writeln!(out, "{:<10} {:<3} {:>5}", p.player_id, position, p.projection);
    }
    out
}
