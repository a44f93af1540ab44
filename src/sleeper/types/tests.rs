//! Deserialization tests against trimmed Sleeper payloads

use super::*;
use serde_json::json;

#[test]
fn test_league_settings_and_derived_fields() {
    let league: League = serde_json::from_value(json!({
        "league_id": "992195707941212160",
        "name": "Test League",
        "season": "2023",
        "season_type": "regular",
        "total_rosters": 12,
        "draft_id": "992195708587139072",
        "roster_positions": ["QB", "RB", "RB", "WR", "WR", "TE", "FLEX", "K", "DEF", "BN"],
        "scoring_settings": { "rec": 0.5, "pass_td": 4.0 },
        "settings": {
            "playoff_week_start": 15,
            "last_scored_leg": 17,
            "league_average_match": 0,
            "num_teams": 12,
            "type": 0
        }
    }))
    .unwrap();

    assert_eq!(league.regular_season_length(), Some(14));
    assert_eq!(league.last_scored_week(), 17);
    assert!(!league.median_scoring());
    assert_eq!(league.scoring_format(), ScoringFormat::HalfPpr);
    assert_eq!(league.roster_positions.len(), 10);
}

#[test]
fn test_league_with_null_settings() {
    let league: League = serde_json::from_value(json!({
        "league_id": "1",
        "season": "2024",
        "settings": null,
        "roster_positions": null,
        "scoring_settings": null
    }))
    .unwrap();

    assert_eq!(league.regular_season_length(), None);
    assert_eq!(league.last_scored_week(), 0);
    assert_eq!(league.scoring_format(), ScoringFormat::Standard);
}

#[test]
fn test_roster_points_and_record() {
    let roster: Roster = serde_json::from_value(json!({
        "roster_id": 1,
        "owner_id": "user-1",
        "players": ["4046", "DET"],
        "starters": ["4046"],
        "settings": {
            "wins": 5, "losses": 9, "ties": 0,
            "fpts": 1379, "fpts_decimal": 52,
            "fpts_against": 1509, "fpts_against_decimal": 8,
            "ppts": 1600, "ppts_decimal": 10
        },
        "metadata": { "record": "LLLWWWLLLLWLWL", "streak": "1L" }
    }))
    .unwrap();

    assert_eq!(roster.roster_id, RosterId::new(1));
    assert!((roster.settings.points_for() - 1379.52).abs() < 1e-9);
    assert!((roster.settings.points_against() - 1509.08).abs() < 1e-9);
    assert!((roster.settings.potential_points() - 1600.10).abs() < 1e-9);
    assert_eq!(roster.weeks_completed(), 14);
}

#[test]
fn test_roster_without_metadata_has_no_weeks() {
    let roster: Roster = serde_json::from_value(json!({
        "roster_id": 3,
        "owner_id": null,
        "players": null,
        "settings": {}
    }))
    .unwrap();

    assert_eq!(roster.record(), "");
    assert_eq!(roster.weeks_completed(), 0);
    assert_eq!(roster.settings.points_for(), 0.0);
}

#[test]
fn test_matchup_player_list_fallback() {
    let with_list: Matchup = serde_json::from_value(json!({
        "roster_id": 2,
        "matchup_id": 1,
        "points": 101.5,
        "players": ["a", "b", "c"],
        "starters": ["a"],
        "players_points": { "a": 20.0, "b": 5.5 }
    }))
    .unwrap();
    assert_eq!(with_list.roster_players(), vec!["a", "b", "c"]);
    assert_eq!(with_list.player_points("c"), 0.0);
    assert!(with_list.is_starter("a"));
    assert!(!with_list.is_starter("b"));

    let without_list: Matchup = serde_json::from_value(json!({
        "roster_id": 2,
        "points": null,
        "starters": null,
        "players_points": { "z": 1.0, "y": 2.0 }
    }))
    .unwrap();
    assert_eq!(without_list.roster_players(), vec!["y", "z"]);
    assert_eq!(without_list.points, 0.0);
}

#[test]
fn test_draft_pick_auction_amount() {
    let pick: DraftPick = serde_json::from_value(json!({
        "player_id": "4046",
        "pick_no": 3,
        "round": 1,
        "roster_id": 4,
        "is_keeper": null,
        "metadata": { "amount": "54", "position": "RB", "first_name": "A", "last_name": "B" }
    }))
    .unwrap();

    assert_eq!(pick.auction_amount(), Some(54));
    assert!(!pick.keeper());
    assert_eq!(pick.player_id, PlayerId::new("4046"));
}

#[test]
fn test_bracket_slots_ignore_references() {
    let matchup: BracketMatchup = serde_json::from_value(json!({
        "r": 2, "m": 5,
        "t1": { "w": 1 }, "t2": 4,
        "w": null, "l": null,
        "t1_from": { "w": 1 }
    }))
    .unwrap();

    assert_eq!(matchup.t1, None);
    assert_eq!(matchup.t2, Some(RosterId::new(4)));
    assert_eq!(matchup.p, None);
}

#[test]
fn test_player_info_display_name() {
    let defense = PlayerInfo {
        first_name: Some("Detroit".to_string()),
        last_name: Some("Lions".to_string()),
        position: Some("DEF".to_string()),
        ..PlayerInfo::default()
    };
    assert_eq!(defense.display_name().as_deref(), Some("Detroit Lions"));
    assert_eq!(PlayerInfo::default().display_name(), None);
}

#[test]
fn test_stat_line_filters_non_numeric() {
    let line: StatLine = serde_json::from_value(json!({
        "pts_ppr": 250.0,
        "pos_rank_ppr": 4,
        "gp": 17,
        "team": "DET",
        "note": null
    }))
    .unwrap();

    assert_eq!(line.0.len(), 3);
    assert_eq!(line.position_rank(ScoringFormat::Ppr), 4);
    assert_eq!(line.position_rank(ScoringFormat::Standard), 0);
    assert!((line.points_per_game(ScoringFormat::Ppr) - 250.0 / 17.0).abs() < 1e-9);
}

#[test]
fn test_projection_set_from_weekly_records() {
    let records: BTreeMap<String, Option<PlayerStatsRecord>> = serde_json::from_value(json!({
        "1": { "week": 1, "stats": { "pts_ppr": 10.0 }, "player": { "position": "WR" } },
        "2": null,
        "3": { "stats": { "pts_ppr": 12.5 } }
    }))
    .unwrap();

    let set = ProjectionSet::from_weekly_records(records);
    assert_eq!(set.weeks.len(), 2);
    assert_eq!(set.position.as_deref(), Some("WR"));
    assert_eq!(set.weeks[&3].points(ScoringFormat::Ppr), 12.5);
}
