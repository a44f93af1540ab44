//! Monte Carlo random-schedule simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aggregate::RosterSeries;
use super::round_to;
use crate::cli::types::RosterId;

/// Schedules simulated per roster.
pub const SIMULATION_TRIALS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub roster_id: RosterId,
    pub expected_wins: f64,
    pub expected_wins_std: f64,
}

/// Simulate with the thread-local generator.
pub fn simulate_schedules(series: &[RosterSeries], median_scoring: bool) -> Vec<SimulationResult> {
    let mut rng = rand::thread_rng();
    simulate_schedules_with(series, median_scoring, SIMULATION_TRIALS, &mut rng)
}

/// Expected wins for every roster if each week's opponent were drawn at
/// random from the rest of the league.
///
/// Under median scoring the week count is doubled and so is the final mean,
/// matching how those leagues count two results per week. Weeks past either
/// side's series are skipped.
pub fn simulate_schedules_with<R: Rng + ?Sized>(
    series: &[RosterSeries],
    median_scoring: bool,
    trials: usize,
    rng: &mut R,
) -> Vec<SimulationResult> {
    (0..series.len())
        .map(|idx| simulate_roster(series, idx, median_scoring, trials, rng))
        .collect()
}

fn simulate_roster<R: Rng + ?Sized>(
    series: &[RosterSeries],
    subject: usize,
    median_scoring: bool,
    trials: usize,
    rng: &mut R,
) -> SimulationResult {
    let roster = &series[subject];
    let empty = SimulationResult {
        roster_id: roster.roster_id,
        expected_wins: 0.0,
        expected_wins_std: 0.0,
    };
    if series.len() < 2 || trials == 0 {
        return empty;
    }

    let mut number_of_weeks = (roster.wins + roster.losses) as usize;
    if median_scoring {
        number_of_weeks *= 2;
    }

    let mut per_trial = Vec::with_capacity(trials);
    for _ in 0..trials {
        let mut wins = 0u32;
        for week in 0..number_of_weeks {
            let Some(&mine) = roster.weekly_points.get(week) else {
                continue;
            };
            let opponent = pick_opponent(series.len(), subject, rng);
            let Some(&theirs) = series[opponent].weekly_points.get(week) else {
                continue;
            };
            if mine > theirs {
                wins += 1;
            }
        }
        per_trial.push(f64::from(wins));
    }

    let mean = per_trial.iter().sum::<f64>() / trials as f64;
    let variance = per_trial.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / trials as f64;
    let expected = if median_scoring { mean * 2.0 } else { mean };

    SimulationResult {
        expected_wins: round_to(expected, 2),
        expected_wins_std: round_to(variance.sqrt(), 2),
        ..empty
    }
}

/// Uniform over every index except `subject`.
fn pick_opponent<R: Rng + ?Sized>(len: usize, subject: usize, rng: &mut R) -> usize {
    let drawn = rng.gen_range(0..len - 1);
    if drawn >= subject {
        drawn + 1
    } else {
        drawn
    }
}
