//! Stats data command implementation

use std::fmt::Write;

use super::common::{column, to_json, CommandContext};
use crate::{
    stats::{service::StatsData, PlayerContribution},
    LeagueId, Result, Week,
};

/// Parameters for the stats data command
#[derive(Debug)]
pub struct StatsDataParams {
    pub league_id: Option<LeagueId>,
    pub no_cache: bool,
    pub as_json: bool,
    pub start_week: Week,
    pub end_week: Week,
    pub by_roster: bool,
    pub limit: Option<usize>,
}

/// Handle the stats data command
pub async fn handle_stats_data(params: StatsDataParams) -> Result<()> {
    let ctx = CommandContext::new(params.league_id, params.no_cache)?;
    // tarpaulin::skip - HTTP call, tested via integration tests
    let data = ctx
        .service
        .load_stats_data(ctx.league_id, params.start_week, params.end_week)
        .await?;

    let rows = select_rows(&data, params.by_roster, params.limit);
    if params.as_json {
        println!("{}", to_json(&rows)?);
    } else {
        print!("{}", render_stats_data(&data, &rows));
    }
    Ok(())
}

/// Season or per-roster rows, cut to `limit`.
pub fn select_rows(data: &StatsData, by_roster: bool, limit: Option<usize>) -> Vec<PlayerContribution> {
    let rows = if by_roster { &data.by_roster } else { &data.season };
    rows.iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

pub fn render_stats_data(data: &StatsData, rows: &[PlayerContribution]) -> String {
    let mut out = String::new();
    match data.weeks {
        Some((start, end)) => {
            let _ = writeln!(out, "Weeks {}-{}", start, end);
        }
        None => {
            let _ = writeln!(out, "No scored weeks in the requested range");
            return out;
        }
    }

    for row in rows {
        let _ = writeln!(
            out,
            "{}  {:<3}  {:<4}  roster {:>2}  {:>7.2} pts ({:>2} gp)  started {:>7.2} ({:>2})  rd {}",
            column(&row.name, 24),
            row.position,
            row.team.as_deref().unwrap_or("FA"),
            row.roster_id,
            row.total_points,
            row.total_games,
            row.started_points,
            row.started_games,
            row.draft_round
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    out
}
