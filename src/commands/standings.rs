//! Standings command implementation

use std::collections::HashMap;
use std::fmt::Write;

use super::common::{column, format_record, to_json, CommandContext};
use crate::{stats::service::Standings, LeagueId, Result};

/// Handle the standings command
pub async fn handle_standings(
    league_id: Option<LeagueId>,
    no_cache: bool,
    as_json: bool,
    trials: usize,
) -> Result<()> {
    let mut ctx = CommandContext::new(league_id, no_cache)?;
    ctx.service = ctx.service.with_simulation_trials(trials);
    // tarpaulin::skip - HTTP call, tested via integration tests
    let standings = ctx.service.load_standings(ctx.league_id).await?;

    if as_json {
        println!("{}", to_json(&standings)?);
    } else {
        print!("{}", render_standings(&standings));
    }
    Ok(())
}

pub fn render_standings(standings: &Standings) -> String {
    let names: HashMap<_, _> = standings
        .teams
        .iter()
        .map(|t| (t.roster_id, t.label()))
        .collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>2}  {}  {:>7}  {:>7}  {:>8}  {:>7}  {:>6}  {:>12}",
        "#", column("Team", 24), "Record", "Median", "All-play", "Power", "Eff%", "Sim wins"
    );
    for (ranked, sim) in standings.rankings.iter().zip(&standings.simulations) {
        let name = names
            .get(&ranked.roster_id)
            .cloned()
            .unwrap_or_else(|| format!("Team {}", ranked.roster_id));
        let _ = writeln!(
            out,
            "{:>2}  {}  {:>7}  {:>7}  {:>8}  {:>7.2}  {:>6.2}  {:>5.2} ± {:<4.2}",
            ranked.regular_season_rank,
            column(&name, 24),
            format_record(ranked.wins, ranked.losses, ranked.ties),
            format_record(ranked.median_wins, ranked.median_losses, 0),
            format_record(ranked.wins_against_all, ranked.losses_against_all, ranked.ties_against_all),
            ranked.power_score,
            ranked.efficiency,
            sim.expected_wins,
            sim.expected_wins_std,
        );
    }
    out
}
