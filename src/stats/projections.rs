//! Rest-of-season projection totals for a batch of players.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::cli::types::{PlayerId, ScoringFormat, Season, Week};
use crate::sleeper::provider::LeagueDataProvider;
use crate::sleeper::types::ProjectionSet;

/// Distinct players fetched per call; the rest get the empty result.
pub const MAX_PROJECTION_IDS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProjection {
    pub player_id: PlayerId,
    /// Projected points from the target week on, rounded.
    pub projection: i64,
    /// Empty when unknown.
    pub position: String,
}

impl PlayerProjection {
    fn empty(player_id: &PlayerId) -> Self {
        Self {
            player_id: player_id.clone(),
            projection: 0,
            position: String::new(),
        }
    }
}

/// Sum of projected points for `target_week` and every later week.
pub fn remaining_points(set: &ProjectionSet, target_week: Week, format: ScoringFormat) -> i64 {
    set.weeks
        .range(target_week.as_u16()..)
        .map(|(_, line)| line.points(format))
        .sum::<f64>()
        .round() as i64
}

/// One result per requested id, in request order.
///
/// Each distinct id is fetched once, all fetches in flight together. A
/// failed fetch degrades that player to an empty result.
pub async fn fetch_projections(
    provider: &dyn LeagueDataProvider,
    player_ids: &[PlayerId],
    season: Season,
    target_week: Week,
    format: ScoringFormat,
) -> Vec<PlayerProjection> {
    let mut seen = HashSet::new();
    let distinct: Vec<&PlayerId> = player_ids.iter().filter(|id| seen.insert(*id)).collect();
    if distinct.len() > MAX_PROJECTION_IDS {
        warn!(
            requested = distinct.len(),
            limit = MAX_PROJECTION_IDS,
            "too many players for one projection batch; extra players get no projection"
        );
    }
    let batch: Vec<&PlayerId> = distinct.into_iter().take(MAX_PROJECTION_IDS).collect();
    debug!(players = batch.len(), %season, week = %target_week, "fetching projections");

    let fetched = join_all(batch.iter().map(|id| provider.player_projections(id, season))).await;

    let results: HashMap<&PlayerId, PlayerProjection> = batch
        .into_iter()
        .zip(fetched)
        .map(|(id, outcome)| {
            let projection = match outcome {
                Ok(set) => PlayerProjection {
                    player_id: id.clone(),
                    projection: remaining_points(&set, target_week, format),
                    position: set.position.unwrap_or_default(),
                },
                Err(e) => {
                    warn!(player_id = %id, error = %e, "projection fetch failed");
                    PlayerProjection::empty(id)
                }
            };
            (id, projection)
        })
        .collect();

    player_ids
        .iter()
        .map(|id| {
            results
                .get(id)
                .cloned()
                .unwrap_or_else(|| PlayerProjection::empty(id))
        })
        .collect()
}
