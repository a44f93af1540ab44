//! End-to-end tests: the HTTP client against a mock Sleeper API, driven
//! through the stats service.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};
use sleeper_ffl::{
    sleeper::SleeperClient, stats::StatsService, LeagueId, RosterId, ScoringFormat, SleeperError,
    Week,
};
use std::sync::Arc;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const LEAGUE: u64 = 4242;

async fn mount(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn roster(id: u32, owner: &str, wins: u32, losses: u32, fpts: u32, record: &str) -> Value {
    json!({
        "roster_id": id,
        "owner_id": owner,
        "players": [],
        "starters": [],
        "settings": {
            "wins": wins, "losses": losses, "ties": 0,
            "fpts": fpts, "fpts_decimal": 0,
            "fpts_against": 0, "fpts_against_decimal": 0,
            "ppts": fpts + 50, "ppts_decimal": 0
        },
        "metadata": { "record": record }
    })
}

fn matchup(roster: u32, matchup_id: u32, points: f64) -> Value {
    json!({
        "roster_id": roster,
        "matchup_id": matchup_id,
        "points": points,
        "players": [format!("p{}", roster)],
        "starters": [format!("p{}", roster)],
        "players_points": { format!("p{}", roster): points / 4.0 }
    })
}

/// Four teams, two regular-season weeks, one playoff week.
///
/// Week 1: 1 beats 3 (130-95), 2 beats 4 (100-70).
/// Week 2: 1 beats 2 (120-100), 3 beats 4 (85-80).
/// Week 3: final, 1 vs 2 (110-105).
async fn mock_league(server: &MockServer) {
    mount(
        server,
        &format!("/league/{}", LEAGUE),
        json!({
            "league_id": LEAGUE.to_string(),
            "name": "Mock League",
            "season": "2023",
            "season_type": "regular",
            "total_rosters": 4,
            "draft_id": "d1",
            "roster_positions": ["QB", "RB", "WR", "BN"],
            "scoring_settings": { "rec": 1.0 },
            "settings": {
                "playoff_week_start": 3,
                "last_scored_leg": 3,
                "league_average_match": 0
            }
        }),
    )
    .await;
    mount(
        server,
        &format!("/league/{}/rosters", LEAGUE),
        json!([
            roster(1, "u1", 2, 0, 250, "WW"),
            roster(2, "u2", 1, 1, 200, "WL"),
            roster(3, "u3", 1, 1, 180, "LW"),
            roster(4, "u4", 0, 2, 150, "LL"),
        ]),
    )
    .await;
    mount(
        server,
        &format!("/league/{}/users", LEAGUE),
        json!([
            { "user_id": "u1", "display_name": "alpha", "metadata": { "team_name": "Alpha Dogs" } },
            { "user_id": "u2", "display_name": "bravo" }
        ]),
    )
    .await;
    mount(
        server,
        &format!("/league/{}/matchups/1", LEAGUE),
        json!([matchup(1, 1, 130.0), matchup(3, 1, 95.0), matchup(2, 2, 100.0), matchup(4, 2, 70.0)]),
    )
    .await;
    mount(
        server,
        &format!("/league/{}/matchups/2", LEAGUE),
        json!([matchup(1, 1, 120.0), matchup(2, 1, 100.0), matchup(3, 2, 85.0), matchup(4, 2, 80.0)]),
    )
    .await;
    mount(
        server,
        &format!("/league/{}/matchups/3", LEAGUE),
        json!([matchup(1, 1, 110.0), matchup(2, 1, 105.0)]),
    )
    .await;
    mount(
        server,
        &format!("/league/{}/winners_bracket", LEAGUE),
        json!([{ "r": 1, "m": 1, "t1": 1, "t2": 2, "w": 1, "l": 2, "p": 1 }]),
    )
    .await;
    mount(server, &format!("/league/{}/losers_bracket", LEAGUE), json!([])).await;
    mount(server, "/players/nfl", json!({})).await;
    mount(server, "/draft/d1", json!({ "draft_id": "d1", "type": "snake", "status": "complete" })).await;
    mount(
        server,
        "/draft/d1/picks",
        json!([
            { "player_id": "p1", "pick_no": 1, "round": 1, "roster_id": 1, "picked_by": "u1",
              "metadata": { "position": "RB", "first_name": "Lead", "last_name": "Back" } },
            { "player_id": "p2", "pick_no": 2, "round": 1, "roster_id": 2, "picked_by": "u2",
              "metadata": { "position": "WR", "first_name": "Bust", "last_name": "Receiver" } }
        ]),
    )
    .await;
    mount(
        server,
        "/stats/nfl/regular/2023",
        json!({
            "p1": { "pts_ppr": 300.0, "gp": 15.0, "pos_rank_ppr": 2 },
            "p2": { "pts_ppr": 100.0, "gp": 10.0, "pos_rank_ppr": 50 }
        }),
    )
    .await;
}

async fn service_for(server: &MockServer) -> StatsService {
    let client = SleeperClient::with_base_urls(&server.uri(), &server.uri()).unwrap();
    StatsService::new(Arc::new(client)).with_simulation_trials(500)
}

#[tokio::test]
async fn test_league_summary_splits_regular_season_and_playoffs() {
    let server = MockServer::start().await;
    mock_league(&server).await;
    let service = service_for(&server).await;

    let summary = service
        .load_league_summary(LeagueId::new(LEAGUE))
        .await
        .unwrap();

    assert_eq!(summary.regular_season_length, 2);
    assert_eq!(summary.last_scored_week, 3);
    assert_eq!(summary.scoring_format, ScoringFormat::Ppr);
    assert_eq!(summary.rosters.len(), 4);
    assert_eq!(summary.rosters[0].label(), "Alpha Dogs");
    assert_eq!(summary.rosters[1].label(), "bravo");
    assert_eq!(summary.rosters[2].label(), "Team 3");
    assert_eq!(summary.winners_bracket.len(), 1);
    assert!(summary.losers_bracket.is_empty());

    let one = &summary.weekly_points[0];
    assert_eq!(one.weekly_points, vec![130.0, 120.0]);
    assert_eq!(one.playoff_points, vec![110.0]);
    let four = &summary.weekly_points[3];
    assert_eq!(four.weekly_points, vec![70.0, 80.0]);
    assert!(four.playoff_points.is_empty());
}

#[tokio::test]
async fn test_standings_rankings_and_simulation() {
    let server = MockServer::start().await;
    mock_league(&server).await;
    let service = service_for(&server).await;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let standings = service
        .load_standings_with(LeagueId::new(LEAGUE), &mut rng)
        .await
        .unwrap();

    assert_eq!(standings.weekly_medians, vec![97.5, 92.5]);

    let order: Vec<u32> = standings
        .rankings
        .iter()
        .map(|r| r.roster_id.as_u32())
        .collect();
    assert_eq!(order, vec![1, 2, 3, 4]);

    let top = &standings.rankings[0];
    assert_eq!((top.median_wins, top.median_losses), (4, 0));
    assert_eq!((top.wins_against_all, top.losses_against_all), (6, 0));
    assert_eq!(top.power_score, 165.0);
    assert_eq!(top.regular_season_rank, 1);

    let second = &standings.rankings[1];
    assert_eq!((second.median_wins, second.median_losses), (3, 1));
    assert_eq!((second.wins_against_all, second.losses_against_all), (4, 2));

    // The top scorer wins every simulated week, the bottom one never does.
    assert_eq!(standings.simulations[0].roster_id, RosterId::new(1));
    assert_eq!(standings.simulations[0].expected_wins, 2.0);
    assert_eq!(standings.simulations[0].expected_wins_std, 0.0);
    assert_eq!(standings.simulations[3].expected_wins, 0.0);
    for sim in &standings.simulations {
        assert!((0.0..=2.0).contains(&sim.expected_wins));
    }
}

#[tokio::test]
async fn test_stats_data_clamps_to_scored_weeks() {
    let server = MockServer::start().await;
    mock_league(&server).await;
    let service = service_for(&server).await;

    let data = service
        .load_stats_data(LeagueId::new(LEAGUE), Week::new(2), Week::new(17))
        .await
        .unwrap();

    assert_eq!(data.weeks, Some((Week::new(2), Week::new(3))));
    let p1 = data
        .season
        .iter()
        .find(|r| r.player_id.as_str() == "p1")
        .unwrap();
    assert_eq!(p1.total_points, 57.5);
    assert_eq!(p1.total_games, 2);
    assert_eq!(p1.started_games, 2);
    assert_eq!(p1.draft_round, Some(1));

    let empty = service
        .load_stats_data(LeagueId::new(LEAGUE), Week::new(5), Week::new(9))
        .await
        .unwrap();
    assert_eq!(empty.weeks, None);
    assert!(empty.season.is_empty());
}

#[tokio::test]
async fn test_draft_values_and_awards() {
    let server = MockServer::start().await;
    mock_league(&server).await;
    let service = service_for(&server).await;

    let report = service
        .load_draft_values(LeagueId::new(LEAGUE))
        .await
        .unwrap();

    assert_eq!(report.draft_type, "snake");
    assert_eq!(report.picks.len(), 2);
    assert_eq!(report.picks[0].name, "Lead Back");
    assert_eq!(report.picks[0].value, 1.9);
    assert_eq!(report.picks[1].value_display, "-3.0");

    let awards = &report.awards;
    assert_eq!(
        awards.most_valuable_pick.as_ref().map(|p| p.name.as_str()),
        Some("Lead Back")
    );
    assert_eq!(
        awards
            .least_valuable_early_pick
            .as_ref()
            .map(|p| p.name.as_str()),
        Some("Bust Receiver")
    );
    assert_eq!(
        awards.most_impressive_draft.as_ref().map(|g| g.roster_id),
        Some(RosterId::new(1))
    );
}

#[tokio::test]
async fn test_unknown_league_is_no_data() {
    let server = MockServer::start().await;
    mount(&server, "/league/1", Value::Null).await;
    let service = service_for(&server).await;

    match service.load_league_summary(LeagueId::new(1)).await {
        Err(SleeperError::NoData { .. }) => (),
        other => panic!("Expected NoData, got {:?}", other.map(|s| s.league_id)),
    }
}

/// Hits the live API; run with `cargo test -- --ignored`.
#[tokio::test]
#[ignore]
async fn test_live_2023_league() {
    let service = StatsService::new(Arc::new(SleeperClient::new().unwrap()));
    let summary = service
        .load_league_summary(LeagueId::new(992195707941212160))
        .await
        .unwrap();

    assert_eq!(summary.regular_season_length, 14);
    assert_eq!(summary.rosters.len(), 12);
    assert_eq!(summary.winners_bracket.len(), 7);
    assert_eq!(summary.losers_bracket.len(), 7);
    assert_eq!(summary.weekly_points.len(), 12);

    let one = summary
        .rosters
        .iter()
        .find(|t| t.roster_id == RosterId::new(1))
        .unwrap();
    assert_eq!(one.points_for.floor(), 1379.0);
    assert_eq!(one.points_against.floor(), 1509.0);
    assert_eq!((one.wins, one.losses), (5, 9));
    assert_eq!(one.record, "LLLWWWLLLLWLWL");

    let series = summary
        .weekly_points
        .iter()
        .find(|s| s.roster_id == RosterId::new(1))
        .unwrap();
    assert_eq!(series.weekly_points.len(), 14);
    assert_eq!(series.playoff_points.len(), 3);
}
