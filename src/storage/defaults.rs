//! Award sets written the first time a season is read.

use super::models::{SeasonalAward, WeeklyBonus};

/// Regular-season weeks seeded with a weekly bonus.
pub const DEFAULT_BONUS_WEEKS: u16 = 14;

pub fn default_awards() -> Vec<SeasonalAward> {
    vec![
        SeasonalAward::new("league_champion", "League Champion", "Wins the championship bracket.", 300.0),
        SeasonalAward::new("runner_up", "Runner-Up", "Loses the championship game.", 100.0),
        SeasonalAward::new(
            "regular_season_champion",
            "Regular Season Champion",
            "Best regular-season record, ties broken by points for.",
            75.0,
        ),
        SeasonalAward::new("most_points_for", "Most Points For", "Highest regular-season points for.", 50.0),
        SeasonalAward::new(
            "best_all_play",
            "Best All-Play Record",
            "Most wins had every team played every other team each week.",
            25.0,
        ),
        SeasonalAward::new(
            "most_impressive_draft",
            "Most Impressive Draft",
            "Highest average draft value across a team's picks.",
            25.0,
        ),
        SeasonalAward::new(
            "least_valuable_early_pick",
            "Least Valuable Early Pick",
            "Lowest draft value among picks in rounds 1-3.",
            0.0,
        ),
        SeasonalAward::new(
            "unluckiest_team",
            "Unluckiest Team",
            "Most points against.",
            15.0,
        ),
    ]
}

pub fn default_weekly_bonuses() -> Vec<WeeklyBonus> {
    (1..=DEFAULT_BONUS_WEEKS)
        .map(|week| WeeklyBonus::new(week, "Highest Score", "Top score of the week.", 10.0))
        .collect()
}
