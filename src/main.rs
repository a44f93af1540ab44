//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_ffl::{
    cli::{AwardsCmd, Commands, GetCmd, Sleeper},
    commands::{
        awards::{handle_awards_get, handle_awards_put},
        draft_value::handle_draft_value,
        handle_clear_cache,
        league_data::handle_league_data,
        projections::handle_projections,
        standings::handle_standings,
        stats_data::{handle_stats_data, StatsDataParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays clean; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = Sleeper::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::LeagueData { league } => {
                handle_league_data(league.league_id, league.no_cache, league.json).await?
            }

            GetCmd::Standings { league, trials } => {
                handle_standings(league.league_id, league.no_cache, league.json, trials).await?
            }

            GetCmd::StatsData {
                league,
                start_week,
                end_week,
                by_roster,
                limit,
            } => {
                handle_stats_data(StatsDataParams {
                    league_id: league.league_id,
                    no_cache: league.no_cache,
                    as_json: league.json,
                    start_week,
                    end_week,
                    by_roster,
                    limit,
                })
                .await?
            }

            GetCmd::DraftValue { league } => {
                handle_draft_value(league.league_id, league.no_cache, league.json).await?
            }

            GetCmd::Projections {
                player_ids,
                season,
                week,
                scoring,
                no_cache,
                json,
            } => handle_projections(player_ids, season, week, scoring, no_cache, json).await?,
        },

        Commands::Awards { cmd } => match cmd {
            AwardsCmd::Get {
                season,
                bonuses,
                json,
            } => handle_awards_get(season, bonuses, json)?,

            AwardsCmd::Put {
                season,
                file,
                bonuses,
                authorization,
            } => handle_awards_put(season, &file, bonuses, authorization.as_deref())?,
        },

        Commands::ClearCache => handle_clear_cache()?,
    }

    Ok(())
}
