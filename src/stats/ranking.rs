//! Power rankings, median-adjusted records and standings.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::aggregate::RosterSeries;
use super::round_to;
use crate::cli::types::RosterId;


/// Population median; even counts average the middle two. 0 for no values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn is_eligible(series: &RosterSeries) -> bool {
    series.points_for != 0.0
}

/// Weeks every roster with nonzero points for has a score for. Scoreless
/// placeholder rosters do not shorten the span.
pub fn common_weeks(series: &[RosterSeries]) -> usize {
    series
        .iter()
        .filter(|s| is_eligible(s))
        .map(|s| s.weekly_points.len())
        .min()
        .unwrap_or(0)
}

/// Median score of each common week, over the rosters that have a score
/// that week.
pub fn weekly_medians(series: &[RosterSeries]) -> Vec<f64> {
    (0..common_weeks(series))
        .map(|week| {
            let scores: Vec<f64> = series
                .iter()
                .filter_map(|s| s.weekly_points.get(week).copied())
                .collect();
            median(&scores)
        })
        .collect()
}

/// Record against the whole field, summed over weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPlayRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

/// All-play records aligned with `series`.
///
/// Rosters with zero points for take no part: they neither play nor get
/// played, and keep an empty record.
pub fn all_play_records(series: &[RosterSeries]) -> Vec<AllPlayRecord> {
    let weeks = common_weeks(series);
    let eligible: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|(_, s)| is_eligible(s))
        .map(|(i, _)| i)
        .collect();

    let mut records = vec![AllPlayRecord::default(); series.len()];
    for week in 0..weeks {
        for &i in &eligible {
            let Some(mine) = series[i].weekly_points.get(week) else {
                continue;
            };
            for &j in &eligible {
                if i == j {
                    continue;
                }
                let Some(theirs) = series[j].weekly_points.get(week) else {
                    continue;
                };
                match mine.total_cmp(theirs) {
                    Ordering::Greater => records[i].wins += 1,
                    Ordering::Less => records[i].losses += 1,
                    Ordering::Equal => records[i].ties += 1,
                }
            }
        }
    }
    records
}

/// `wins / (wins + losses)`, 0 with no decisions.
pub fn win_percentage(wins: u32, losses: u32) -> f64 {
    let games = wins + losses;
    if games == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(games)
    }
}

/// `round((mean*6 + (max + min)*2 + win_pct*400) / 10, 2)`
pub fn power_score(mean: f64, max: f64, min: f64, win_pct: f64) -> f64 {
    round_to((mean * 6.0 + (max + min) * 2.0 + win_pct * 400.0) / 10.0, 2)
}

/// Share of potential points actually started, as a percentage.
pub fn efficiency(points_for: f64, potential_points: f64) -> f64 {
    if potential_points == 0.0 {
        0.0
    } else {
        round_to(points_for / potential_points * 100.0, 2)
    }
}

/// A roster's series with every derived ranking field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRoster {
    pub roster_id: RosterId,
    pub owner_id: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub potential_points: f64,
    pub record: String,
    pub weekly_points: Vec<f64>,
    pub playoff_points: Vec<f64>,
    /// Wins including the weekly result against the median.
    pub median_wins: u32,
    pub median_losses: u32,
    pub wins_against_all: u32,
    pub losses_against_all: u32,
    pub ties_against_all: u32,
    pub mean_points: f64,
    pub max_points: f64,
    pub min_points: f64,
    pub power_score: f64,
    pub efficiency: f64,
    pub regular_season_rank: u32,
}

/// Full-season ranking pass, returned in standings order.
pub fn rank_rosters(series: &[RosterSeries], median_scoring: bool) -> Vec<RankedRoster> {
    let medians = weekly_medians(series);
    let all_play = all_play_records(series);

    let mut ranked: Vec<RankedRoster> = series
        .iter()
        .zip(all_play)
        .map(|(s, ap)| {
            let (mut median_wins, mut median_losses) = (s.wins, s.losses);
            if !median_scoring {
                for (score, week_median) in s.weekly_points.iter().zip(&medians) {
                    if score > week_median {
                        median_wins += 1;
                    } else {
                        median_losses += 1;
                    }
                }
            }

            let (mean, max, min) = spread(&s.weekly_points);
            let win_pct = win_percentage(median_wins, median_losses);

            RankedRoster {
                roster_id: s.roster_id,
                owner_id: s.owner_id.clone(),
                wins: s.wins,
                losses: s.losses,
                ties: s.ties,
                points_for: s.points_for,
                points_against: s.points_against,
                potential_points: s.potential_points,
                record: s.record.clone(),
                weekly_points: s.weekly_points.clone(),
                playoff_points: s.playoff_points.clone(),
                median_wins,
                median_losses,
                wins_against_all: ap.wins,
                losses_against_all: ap.losses,
                ties_against_all: ap.ties,
                mean_points: round_to(mean, 2),
                max_points: max,
                min_points: min,
                power_score: power_score(mean, max, min, win_pct),
                efficiency: efficiency(s.points_for, s.potential_points),
                regular_season_rank: 0,
            }
        })
        .collect();

    sort_standings(&mut ranked);
    for (i, roster) in ranked.iter_mut().enumerate() {
        roster.regular_season_rank = i as u32 + 1;
    }
    ranked
}

/// Real wins desc, then points for desc.
pub fn sort_standings(rosters: &mut [RankedRoster]) {
    rosters.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.points_for.total_cmp(&a.points_for))
    });
}

fn spread(points: &[f64]) -> (f64, f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let sum: f64 = points.iter().sum();
    let max = points.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = points.iter().copied().fold(f64::INFINITY, f64::min);
    (sum / points.len() as f64, max, min)
}
