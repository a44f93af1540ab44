//! League data command implementation

use std::fmt::Write;

use super::common::{column, format_record, to_json, CommandContext};
use crate::{stats::service::LeagueSummary, LeagueId, Result};

/// Handle the league data command
pub async fn handle_league_data(
    league_id: Option<LeagueId>,
    no_cache: bool,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::new(league_id, no_cache)?;
    // tarpaulin::skip - HTTP call, tested via integration tests
    let summary = ctx.service.load_league_summary(ctx.league_id).await?;

    if as_json {
        println!("{}", to_json(&summary)?);
    } else {
        print!("{}", render_league_summary(&summary));
    }
    Ok(())
}

/// Text view: settings header, then one line per team.
pub fn render_league_summary(summary: &LeagueSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} {}, {} teams, {})",
        summary.name.as_deref().unwrap_or("Unnamed league"),
        summary.season,
        summary.season_type,
        summary.total_rosters,
        summary.scoring_format,
    );
    let _ = writeln!(
        out,
        "Regular season: {} weeks | Last scored week: {} | Median scoring: {}",
        summary.regular_season_length,
        summary.last_scored_week,
        if summary.median_scoring { "yes" } else { "no" },
    );

    for team in &summary.rosters {
        let series = summary
            .weekly_points
            .iter()
            .find(|s| s.roster_id == team.roster_id);
        let (weeks, playoffs) = series.map_or((0, 0), |s| (s.weekly_points.len(), s.playoff_points.len()));
        let _ = writeln!(
            out,
            "{:>3}  {}  {:>7}  PF {:>8.2}  PA {:>8.2}  {:>2} wk  {} playoff  {}",
            team.roster_id,
            column(&team.label(), 24),
            format_record(team.wins, team.losses, team.ties),
            team.points_for,
            team.points_against,
            weeks,
            playoffs,
            team.record,
        );
    }

    let _ = writeln!(
        out,
        "Brackets: {} winners matches, {} losers matches",
        summary.winners_bracket.len(),
        summary.losers_bracket.len()
    );
    out
}
