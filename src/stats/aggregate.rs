//! Folding weekly matchup snapshots into roster point series and per-player
//! contribution rows.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::round_to;
use crate::cli::types::{PlayerId, RosterId, Week};
use crate::sleeper::types::{DraftPick, Matchup, PlayerDirectory, Roster};


/// One roster's season as a week-indexed series plus its official totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSeries {
    pub roster_id: RosterId,
    pub owner_id: Option<String>,
    /// Regular-season points, index 0 = week 1. Only weeks the roster has a
    /// result for.
    pub weekly_points: Vec<f64>,
    pub playoff_points: Vec<f64>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub potential_points: f64,
    pub record: String,
}

impl RosterSeries {
    /// Totals from the roster, with empty weekly series.
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            roster_id: roster.roster_id,
            owner_id: roster.owner_id.clone(),
            weekly_points: Vec::new(),
            playoff_points: Vec::new(),
            wins: roster.settings.wins,
            losses: roster.settings.losses,
            ties: roster.settings.ties,
            points_for: roster.settings.points_for(),
            points_against: roster.settings.points_against(),
            potential_points: roster.settings.potential_points(),
            record: roster.record().to_string(),
        }
    }
}

/// All matchups of one week. A week whose fetch failed is kept with no
/// matchups so it still counts as played-but-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekSnapshot {
    pub week: Week,
    pub matchups: Vec<Matchup>,
}

impl WeekSnapshot {
    pub fn new(week: Week, matchups: Vec<Matchup>) -> Self {
        Self { week, matchups }
    }

    pub fn empty(week: Week) -> Self {
        Self::new(week, Vec::new())
    }
}

/// Build each roster's regular-season and playoff point series.
///
/// A roster's regular-season series is cut at the number of results in its
/// record string, so rosters that joined late or have odd records never get
/// phantom weeks. Weeks after `regular_season_length` go to `playoff_points`
/// whenever the roster shows up in that week's matchups.
pub fn build_roster_series(
    rosters: &[Roster],
    weeks: &[WeekSnapshot],
    regular_season_length: u16,
) -> Vec<RosterSeries> {
    let mut points: HashMap<(Week, RosterId), f64> = HashMap::new();
    let mut fetched: HashSet<Week> = HashSet::new();
    for snapshot in weeks {
        fetched.insert(snapshot.week);
        for matchup in &snapshot.matchups {
            points.insert((snapshot.week, matchup.roster_id), matchup.points);
        }
    }

    let mut playoff_weeks: Vec<Week> = fetched
        .iter()
        .copied()
        .filter(|w| w.as_u16() > regular_season_length)
        .collect();
    playoff_weeks.sort();

    rosters
        .iter()
        .map(|roster| {
            let mut series = RosterSeries::from_roster(roster);
            let completed = roster
                .weeks_completed()
                .min(usize::from(regular_season_length));

            for offset in 0..completed {
                let week = Week::new(offset as u16 + 1);
                if !fetched.contains(&week) {
                    break;
                }
                let score = points.get(&(week, roster.roster_id)).copied().unwrap_or(0.0);
                series.weekly_points.push(score);
            }

            series.playoff_points = playoff_weeks
                .iter()
                .filter_map(|week| points.get(&(*week, roster.roster_id)).copied())
                .collect();

            series
        })
        .collect()
}

/// A player's production for one roster (or, once collapsed, for the season).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerContribution {
    pub roster_id: RosterId,
    pub owner_id: Option<String>,
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub team: Option<String>,
    pub draft_round: Option<u32>,
    pub started_points: f64,
    pub total_points: f64,
    pub started_games: u32,
    pub total_games: u32,
    pub last_week_seen: Week,
}

/// Lookups needed to label contribution rows.
pub struct ContributionContext<'a> {
    owners: HashMap<RosterId, Option<String>>,
    directory: &'a PlayerDirectory,
    draft_rounds: HashMap<PlayerId, u32>,
}

impl<'a> ContributionContext<'a> {
    pub fn new(rosters: &[Roster], directory: &'a PlayerDirectory, picks: &[DraftPick]) -> Self {
        Self {
            owners: rosters
                .iter()
                .map(|r| (r.roster_id, r.owner_id.clone()))
                .collect(),
            directory,
            draft_rounds: picks
                .iter()
                .map(|p| (p.player_id.clone(), p.round))
                .collect(),
        }
    }

    fn new_row(&self, roster_id: RosterId, player_id: &str, week: Week) -> PlayerContribution {
        let info = self.directory.get(player_id);
        let player_id = PlayerId::new(player_id);
        PlayerContribution {
            roster_id,
            owner_id: self.owners.get(&roster_id).cloned().flatten(),
            name: info
                .and_then(|i| i.display_name())
                .unwrap_or_else(|| player_id.to_string()),
            position: info.and_then(|i| i.position.clone()).unwrap_or_default(),
            team: info.and_then(|i| i.team.clone()),
            draft_round: self.draft_rounds.get(&player_id).copied(),
            player_id,
            started_points: 0.0,
            total_points: 0.0,
            started_games: 0,
            total_games: 0,
            last_week_seen: week,
        }
    }
}

/// Rows keyed by (roster, player), kept in first-seen order.
#[derive(Debug, Default)]
pub struct ContributionAccumulator {
    index: HashMap<(RosterId, PlayerId), usize>,
    rows: Vec<PlayerContribution>,
}

impl ContributionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one week once: every rostered player yields one event.
    pub fn record_week(&mut self, snapshot: &WeekSnapshot, ctx: &ContributionContext<'_>) {
        for matchup in &snapshot.matchups {
            self.record_matchup(snapshot.week, matchup, ctx);
        }
    }

    fn record_matchup(&mut self, week: Week, matchup: &Matchup, ctx: &ContributionContext<'_>) {
        for player_id in matchup.roster_players() {
            let key = (matchup.roster_id, PlayerId::new(player_id));
            let idx = match self.index.get(&key) {
                Some(idx) => *idx,
                None => {
                    self.rows.push(ctx.new_row(matchup.roster_id, player_id, week));
                    self.index.insert(key, self.rows.len() - 1);
                    self.rows.len() - 1
                }
            };

            let row = &mut self.rows[idx];
            let points = matchup.player_points(player_id);
            row.total_points += points;
            row.total_games += 1;
            if matchup.is_starter(player_id) {
                row.started_points += points;
                row.started_games += 1;
            }
            if week > row.last_week_seen {
                row.last_week_seen = week;
            }
        }
    }

    /// One row per (roster, player), points rounded to hundredths.
    pub fn into_rows(self) -> Vec<PlayerContribution> {
        self.rows
            .into_iter()
            .map(|mut row| {
                row.total_points = round_to(row.total_points, 2);
                row.started_points = round_to(row.started_points, 2);
                row
            })
            .collect()
    }
}

/// Collapse (roster, player) rows into one row per player.
///
/// Totals are summed across every roster the player appeared on; ownership
/// goes to the roster with the latest `last_week_seen`, and on equal weeks
/// the row seen later in `rows` wins.
pub fn collapse_by_player(rows: &[PlayerContribution]) -> Vec<PlayerContribution> {
    let mut index: HashMap<&PlayerId, usize> = HashMap::new();
    let mut season: Vec<PlayerContribution> = Vec::new();

    for row in rows {
        match index.get(&row.player_id) {
            None => {
                index.insert(&row.player_id, season.len());
                season.push(row.clone());
            }
            Some(&idx) => {
                let agg = &mut season[idx];
                agg.total_points += row.total_points;
                agg.started_points += row.started_points;
                agg.total_games += row.total_games;
                agg.started_games += row.started_games;
                if row.last_week_seen >= agg.last_week_seen {
                    agg.roster_id = row.roster_id;
                    agg.owner_id = row.owner_id.clone();
                    agg.last_week_seen = row.last_week_seen;
                }
            }
        }
    }

    for row in &mut season {
        row.total_points = round_to(row.total_points, 2);
        row.started_points = round_to(row.started_points, 2);
    }
    season
}

/// Clamp a requested week range to `[max(1, start), min(end, last_scored)]`.
/// `None` when nothing is left.
pub fn clamp_week_range(start: Week, end: Week, last_scored: Week) -> Option<(Week, Week)> {
    let start = start.max(Week::new(1));
    let end = end.min(last_scored);
    (start <= end).then_some((start, end))
}

/// Highest total first; ties by player id for stable output.
pub fn sort_by_total_points(rows: &mut [PlayerContribution]) {
    rows.sort_by(|a, b| {
        b.total_points
            .total_cmp(&a.total_points)
            .then_with(|| a.player_id.cmp(&b.player_id))
            .then_with(|| a.roster_id.cmp(&b.roster_id))
    });
}
