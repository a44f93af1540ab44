//! Draft pick value against position-tiered finish curves.
//!
//! A pick is worth more the better its end-of-season position rank is
//! relative to where it was taken, scaled by how scarce that finish is at the
//! position. The tables and coefficients here are fixed; changing them breaks
//! comparisons with earlier seasons.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::round_to;
use crate::cli::types::{PlayerId, Position, RosterId, ScoringFormat};
use crate::sleeper::types::{Draft, DraftPick, PlayerDirectory, StatLine};

#[cfg(test)]
mod tests;

/// Lowest score a pick can get.
pub const VALUE_FLOOR: f64 = -3.0;

/// Season PPG treated as a ceiling.
const PPG_CEILING: f64 = 25.0;

const RANK_WEIGHT: f64 = 0.7;
const PPG_WEIGHT: f64 = 0.3;
const FIRST_ROUND_ADJUST: f64 = 2.0;

/// Ordered `(rank <= threshold, multiplier)` breakpoints plus the multiplier
/// for every rank past the last one.
struct TierTable {
    breakpoints: &'static [(u32, f64)],
    otherwise: f64,
}

impl TierTable {
    fn lookup(&self, rank: u32) -> f64 {
        self.breakpoints
            .iter()
            .find(|(threshold, _)| rank <= *threshold)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(self.otherwise)
    }
}

const QB_TIERS: TierTable = TierTable {
    breakpoints: &[(3, 1.5), (6, 1.3), (12, 1.1), (18, 1.0)],
    otherwise: 0.7,
};

const RB_TIERS: TierTable = TierTable {
    breakpoints: &[(6, 2.0), (12, 1.7), (18, 1.4), (24, 1.2), (30, 1.1), (36, 1.0)],
    otherwise: 0.8,
};

const WR_TIERS: TierTable = TierTable {
    breakpoints: &[(6, 1.8), (12, 1.5), (24, 1.3), (36, 1.1), (48, 1.0)],
    otherwise: 0.8,
};

const TE_TIERS: TierTable = TierTable {
    breakpoints: &[(3, 2.0), (6, 1.6), (12, 1.2), (18, 1.0)],
    otherwise: 0.7,
};

// Kickers and defenses share one curve.
const K_DEF_TIERS: TierTable = TierTable {
    breakpoints: &[(3, 1.2), (6, 1.1), (12, 1.0)],
    otherwise: 0.8,
};

fn tier_table(position: Position) -> &'static TierTable {
    match position {
        Position::QB => &QB_TIERS,
        Position::RB => &RB_TIERS,
        Position::WR => &WR_TIERS,
        Position::TE => &TE_TIERS,
        Position::K | Position::DEF => &K_DEF_TIERS,
    }
}

/// Scarcity multiplier for finishing `rank` at `position`; 1.0 for
/// positions without a table.
pub fn tier_multiplier(position: Option<Position>, rank: u32) -> f64 {
    position.map_or(1.0, |p| tier_table(p).lookup(rank))
}

pub fn position_weight(position: Option<Position>) -> f64 {
    match position {
        Some(Position::RB) => 1.0,
        Some(Position::WR) => 0.9,
        Some(Position::TE) => 1.1,
        Some(Position::QB) => 0.7,
        Some(Position::K) | Some(Position::DEF) => 0.4,
        None => 1.0,
    }
}

/// Numeric pick value, rounded to one decimal and floored at [`VALUE_FLOOR`].
///
/// `position_rank == 0` means the player never scored and is worth 0.
/// A pick number of 0 (a $0 auction buy) is treated as 1.
pub fn draft_value(pick_number: u32, round: u32, position: &str, position_rank: u32, ppg: f64) -> f64 {
    if position_rank == 0 {
        return 0.0;
    }

    let position = position.parse::<Position>().ok();
    let base = position_weight(position) * tier_multiplier(position, position_rank);

    let pick = f64::from(pick_number.max(1));
    let adjust = if round == 1 { FIRST_ROUND_ADJUST } else { 0.0 };
    let rank_score = ((pick + adjust - f64::from(position_rank)) / pick) * base;
    let ppg_score = (ppg / PPG_CEILING) * base;

    let score = round_to(rank_score * RANK_WEIGHT + ppg_score * PPG_WEIGHT, 1);
    if score > VALUE_FLOOR {
        // Avoid "-0.0" once formatted.
        score + 0.0
    } else {
        VALUE_FLOOR
    }
}

/// [`draft_value`] formatted to one decimal.
pub fn draft_value_score(
    pick_number: u32,
    round: u32,
    position: &str,
    position_rank: u32,
    ppg: f64,
) -> String {
    format!("{:.1}", draft_value(pick_number, round, position, position_rank, ppg))
}

/// A pick joined with its season results and value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPick {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub pick_no: u32,
    pub round: u32,
    pub roster_id: Option<RosterId>,
    pub picked_by: Option<String>,
    pub amount: Option<u32>,
    pub is_keeper: bool,
    pub season_ppg: f64,
    pub position_rank: u32,
    pub value: f64,
    pub value_display: String,
}

/// Score every pick of a draft against season stats.
///
/// Auction drafts score the price paid in place of the pick number, always
/// as a first-round pick.
pub fn score_draft(
    draft: &Draft,
    picks: &[DraftPick],
    stats: &HashMap<String, StatLine>,
    directory: &PlayerDirectory,
    format: ScoringFormat,
) -> Vec<ScoredPick> {
    let auction = draft.is_auction();
    let no_stats = StatLine::default();

    picks
        .iter()
        .map(|pick| {
            let line = stats.get(pick.player_id.as_str()).unwrap_or(&no_stats);
            let info = directory.get(pick.player_id.as_str());

            let position = pick
                .metadata
                .position
                .clone()
                .or_else(|| info.and_then(|i| i.position.clone()))
                .unwrap_or_default();
            let name = pick_name(pick)
                .or_else(|| info.and_then(|i| i.display_name()))
                .unwrap_or_else(|| pick.player_id.to_string());

            let season_ppg = round_to(line.points_per_game(format), 2);
            let position_rank = line.position_rank(format);
            let (pick_number, round) = if auction {
                (pick.auction_amount().unwrap_or(0), 1)
            } else {
                (pick.pick_no, pick.round)
            };
            let value = draft_value(pick_number, round, &position, position_rank, season_ppg);

            ScoredPick {
                player_id: pick.player_id.clone(),
                name,
                position,
                pick_no: pick.pick_no,
                round: pick.round,
                roster_id: pick.roster_id,
                picked_by: pick.picked_by.clone(),
                amount: pick.auction_amount(),
                is_keeper: pick.keeper(),
                season_ppg,
                position_rank,
                value,
                value_display: format!("{:.1}", value),
            }
        })
        .collect()
}

fn pick_name(pick: &DraftPick) -> Option<String> {
    let parts: Vec<&str> = [pick.metadata.first_name.as_deref(), pick.metadata.last_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// Mean pick value of one roster's draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftGrade {
    pub roster_id: RosterId,
    pub picks: usize,
    pub mean_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftAwards {
    pub most_valuable_pick: Option<ScoredPick>,
    /// Worst value among rounds 1-3.
    pub least_valuable_early_pick: Option<ScoredPick>,
    pub most_impressive_draft: Option<DraftGrade>,
    /// Every roster's grade, best first.
    pub grades: Vec<DraftGrade>,
}

/// Last round counted as "early".
pub const EARLY_ROUND_CUTOFF: u32 = 3;

/// Award inputs from scored picks. Keepers are not eligible.
pub fn draft_awards(scored: &[ScoredPick]) -> DraftAwards {
    let eligible: Vec<&ScoredPick> = scored.iter().filter(|p| !p.is_keeper).collect();

    let mut awards = DraftAwards::default();
    for pick in &eligible {
        if awards
            .most_valuable_pick
            .as_ref()
            .map_or(true, |best| pick.value > best.value)
        {
            awards.most_valuable_pick = Some((*pick).clone());
        }
        if pick.round <= EARLY_ROUND_CUTOFF
            && awards
                .least_valuable_early_pick
                .as_ref()
                .map_or(true, |worst| pick.value < worst.value)
        {
            awards.least_valuable_early_pick = Some((*pick).clone());
        }
    }

    let mut by_roster: BTreeMap<RosterId, Vec<f64>> = BTreeMap::new();
    for pick in &eligible {
        if let Some(roster_id) = pick.roster_id {
            by_roster.entry(roster_id).or_default().push(pick.value);
        }
    }
    let mut grades: Vec<DraftGrade> = by_roster
        .into_iter()
        .map(|(roster_id, values)| DraftGrade {
            roster_id,
            picks: values.len(),
            mean_value: round_to(values.iter().sum::<f64>() / values.len() as f64, 2),
        })
        .collect();
    grades.sort_by(|a, b| {
        b.mean_value
            .total_cmp(&a.mean_value)
            .then_with(|| a.roster_id.cmp(&b.roster_id))
    });

    awards.most_impressive_draft = grades.first().cloned();
    awards.grades = grades;
    awards
}
