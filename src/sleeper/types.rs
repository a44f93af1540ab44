use crate::cli::types::{PlayerId, RosterId, ScoringFormat};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

#[cfg(test)]
mod tests;

/// Sleeper mixes numbers, strings and nulls inside stat objects; keep only
/// the numeric entries.
fn de_numeric_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.as_f64().map(|n| (k, n)))
        .collect())
}

/// Bracket slots hold a roster id, or an object like `{"w": 1}` pointing at an
/// earlier match before the slot is decided.
fn de_bracket_slot<'de, D>(deserializer: D) -> Result<Option<RosterId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .map(RosterId::new))
}

fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of `GET /league/{league_id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub season: String,
    #[serde(default)]
    pub season_type: String,
    #[serde(default)]
    pub total_rosters: u32,
    #[serde(default)]
    pub draft_id: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roster_positions: Vec<String>,
    #[serde(default, deserialize_with = "de_numeric_map")]
    pub scoring_settings: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: LeagueSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub playoff_week_start: Option<u16>,
    #[serde(default)]
    pub last_scored_leg: Option<u16>,
    /// 1 when the league awards an extra result against the weekly median.
    #[serde(default)]
    pub league_average_match: Option<u8>,
    #[serde(default)]
    pub num_teams: Option<u32>,
}

impl League {
    pub fn median_scoring(&self) -> bool {
        self.settings.league_average_match.unwrap_or(0) == 1
    }

    /// Weeks before the playoffs start, if the league reports it.
    pub fn regular_season_length(&self) -> Option<u16> {
        self.settings
            .playoff_week_start
            .filter(|start| *start > 1)
            .map(|start| start - 1)
    }

    pub fn last_scored_week(&self) -> u16 {
        self.settings.last_scored_leg.unwrap_or(0)
    }

    pub fn scoring_format(&self) -> ScoringFormat {
        ScoringFormat::from_reception_points(
            self.scoring_settings.get("rec").copied().unwrap_or(0.0),
        )
    }
}

/// One entry of `GET /league/{league_id}/rosters`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default)]
    pub starters: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: RosterSettings,
    #[serde(default)]
    pub metadata: Option<RosterMetadata>,
}

/// Integer season totals; Sleeper splits points into whole and hundredths.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub fpts: f64,
    #[serde(default)]
    pub fpts_decimal: f64,
    #[serde(default)]
    pub fpts_against: f64,
    #[serde(default)]
    pub fpts_against_decimal: f64,
    #[serde(default)]
    pub ppts: f64,
    #[serde(default)]
    pub ppts_decimal: f64,
}

impl RosterSettings {
    pub fn points_for(&self) -> f64 {
        self.fpts + self.fpts_decimal / 100.0
    }

    pub fn points_against(&self) -> f64 {
        self.fpts_against + self.fpts_against_decimal / 100.0
    }

    pub fn potential_points(&self) -> f64 {
        self.ppts + self.ppts_decimal / 100.0
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterMetadata {
    /// Week-by-week results, e.g. "LLLWWWLLLLWLWL".
    #[serde(default)]
    pub record: Option<String>,
    #[serde(default)]
    pub streak: Option<String>,
}

impl Roster {
    pub fn record(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.record.as_deref())
            .unwrap_or("")
    }

    /// Number of weeks this roster has a result for.
    pub fn weeks_completed(&self) -> usize {
        self.record()
            .chars()
            .filter(|c| matches!(c, 'W' | 'L' | 'T'))
            .count()
    }
}

/// One entry of `GET /league/{league_id}/users`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

impl User {
    pub fn team_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// One roster's entry in `GET /league/{league_id}/matchups/{week}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Matchup {
    pub roster_id: RosterId,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub points: f64,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players_points: HashMap<String, f64>,
}

impl Matchup {
    /// Everyone on the roster this week. Older snapshots omit `players`, in
    /// which case the scored players stand in for the full list.
    pub fn roster_players(&self) -> Vec<&str> {
        match &self.players {
            Some(players) => players.iter().map(String::as_str).collect(),
            None => {
                let mut keys: Vec<&str> = self.players_points.keys().map(String::as_str).collect();
                keys.sort_unstable();
                keys
            }
        }
    }

    pub fn player_points(&self, player_id: &str) -> f64 {
        self.players_points.get(player_id).copied().unwrap_or(0.0)
    }

    pub fn is_starter(&self, player_id: &str) -> bool {
        self.starters.iter().any(|s| s == player_id)
    }
}

/// Root of `GET /draft/{draft_id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Draft {
    pub draft_id: String,
    #[serde(rename = "type", default)]
    pub draft_type: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Draft {
    pub fn is_auction(&self) -> bool {
        self.draft_type.eq_ignore_ascii_case("auction")
    }
}

/// One entry of `GET /draft/{draft_id}/picks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftPick {
    pub player_id: PlayerId,
    pub pick_no: u32,
    pub round: u32,
    #[serde(default)]
    pub roster_id: Option<RosterId>,
    #[serde(default)]
    pub picked_by: Option<String>,
    #[serde(default)]
    pub is_keeper: Option<bool>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: PickMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PickMetadata {
    /// Auction price, sent as a string ("54").
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl DraftPick {
    pub fn auction_amount(&self) -> Option<u32> {
        self.metadata
            .amount
            .as_deref()
            .and_then(|a| a.trim().parse::<u32>().ok())
    }

    pub fn keeper(&self) -> bool {
        self.is_keeper.unwrap_or(false)
    }
}

/// One match of `GET /league/{league_id}/winners_bracket` (or losers).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BracketMatchup {
    /// Round
    pub r: u32,
    /// Match id
    pub m: u32,
    #[serde(default, deserialize_with = "de_bracket_slot")]
    pub t1: Option<RosterId>,
    #[serde(default, deserialize_with = "de_bracket_slot")]
    pub t2: Option<RosterId>,
    #[serde(default, deserialize_with = "de_bracket_slot")]
    pub w: Option<RosterId>,
    #[serde(default, deserialize_with = "de_bracket_slot")]
    pub l: Option<RosterId>,
    /// Placement this match decides, e.g. 1 for the final.
    #[serde(default)]
    pub p: Option<u32>,
}

/// Entry of the `GET /players/nfl` directory.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerInfo {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl PlayerInfo {
    /// Full name when present, otherwise first + last (team defenses only
    /// carry those, e.g. "Detroit Lions").
    pub fn display_name(&self) -> Option<String> {
        if let Some(full) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return Some(full.to_string());
        }
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Player id -> directory entry
pub type PlayerDirectory = HashMap<String, PlayerInfo>;

/// Numeric stat block keyed by Sleeper stat name (`pts_ppr`, `gp`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatLine(#[serde(deserialize_with = "de_numeric_map")] pub BTreeMap<String, f64>);

impl StatLine {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn points(&self, format: ScoringFormat) -> f64 {
        self.get(format.points_key()).unwrap_or(0.0)
    }

    /// Rank within the player's position; 0 when the player has none.
    pub fn position_rank(&self, format: ScoringFormat) -> u32 {
        self.get(format.position_rank_key())
            .filter(|r| *r > 0.0)
            .map(|r| r as u32)
            .unwrap_or(0)
    }

    pub fn games_played(&self) -> f64 {
        self.get("gp").unwrap_or(0.0)
    }

    /// Points per game played, 0 when no games were played.
    pub fn points_per_game(&self, format: ScoringFormat) -> f64 {
        let games = self.games_played();
        if games > 0.0 {
            self.points(format) / games
        } else {
            0.0
        }
    }
}

/// A record from the per-player stats/projections service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerStatsRecord {
    #[serde(default, deserialize_with = "de_null_default")]
    pub stats: StatLine,
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default)]
    pub player: Option<PlayerInfo>,
}

/// Weekly projections for one player over a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSet {
    pub weeks: BTreeMap<u16, StatLine>,
    /// Season-level position from the player block.
    pub position: Option<String>,
}

impl ProjectionSet {
    /// Build from the `grouping=week` payload: week number -> record or null.
    pub fn from_weekly_records(records: BTreeMap<String, Option<PlayerStatsRecord>>) -> Self {
        let mut set = ProjectionSet::default();
        for (key, record) in records {
            let Some(record) = record else {
                continue;
            };
            let Some(week) = record.week.or_else(|| key.parse().ok()) else {
                continue;
            };
            if set.position.is_none() {
                set.position = record
                    .player
                    .as_ref()
                    .and_then(|p| p.position.clone())
                    .filter(|p| !p.is_empty());
            }
            set.weeks.insert(week, record.stats);
        }
        set
    }
}
