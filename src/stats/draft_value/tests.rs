use super::*;
use crate::sleeper::types::PickMetadata;

fn pick(player: &str, pick_no: u32, round: u32, roster: u32, position: &str) -> DraftPick {
    DraftPick {
        player_id: PlayerId::new(player),
        pick_no,
        round,
        roster_id: Some(RosterId::new(roster)),
        picked_by: Some(format!("user{}", roster)),
        is_keeper: None,
        metadata: PickMetadata {
            position: Some(position.to_string()),
            first_name: Some("First".to_string()),
            last_name: Some(player.to_uppercase()),
            ..Default::default()
        },
    }
}

fn stat_line(pts_ppr: f64, gp: f64, pos_rank: f64) -> StatLine {
    StatLine(
        [
            ("pts_ppr".to_string(), pts_ppr),
            ("gp".to_string(), gp),
            ("pos_rank_ppr".to_string(), pos_rank),
        ]
        .into_iter()
        .collect(),
    )
}

fn draft(kind: &str) -> Draft {
    Draft {
        draft_id: "d1".to_string(),
        draft_type: kind.to_string(),
        status: Some("complete".to_string()),
    }
}

#[test]
fn test_unranked_player_scores_zero() {
    assert_eq!(draft_value_score(1, 1, "RB", 0, 0.0), "0.0");
    assert_eq!(draft_value_score(150, 12, "WR", 0, 30.0), "0.0");
}

#[test]
fn test_reference_scores() {
    // base 2.0: rank (1+2-1)/1*2 = 4, ppg 1*2 = 2 -> 2.8 + 0.6
    assert_eq!(draft_value_score(1, 1, "RB", 1, 25.0), "3.4");
    // base 1.1*2.0: rank 48/50*2.2, ppg 0.56*2.2
    assert_eq!(draft_value_score(50, 5, "TE", 2, 14.0), "1.8");
    // Slightly negative scores print without a sign.
    assert_eq!(draft_value_score(24, 2, "WR", 30, 12.5), "0.0");
}

#[test]
fn test_floor_applies() {
    assert_eq!(draft_value(1, 2, "RB", 30, 0.0), VALUE_FLOOR);
    assert_eq!(draft_value_score(1, 2, "RB", 30, 0.0), "-3.0");
}

#[test]
fn test_never_below_floor() {
    for position in ["QB", "RB", "WR", "TE", "K", "DEF", "LB"] {
        for pick_no in [0, 1, 2, 5, 12, 60, 180] {
            for rank in [1, 2, 10, 40, 90] {
                for round in [1, 2, 10] {
                    let v = draft_value(pick_no, round, position, rank, 0.0);
                    assert!(v >= VALUE_FLOOR, "{} {} {} {} -> {}", position, pick_no, rank, round, v);
                    assert!(v.is_finite());
                }
            }
        }
    }
}

#[test]
fn test_tier_breakpoints() {
    let rb = Some(Position::RB);
    assert_eq!(tier_multiplier(rb, 6), 2.0);
    assert_eq!(tier_multiplier(rb, 7), 1.7);
    assert_eq!(tier_multiplier(rb, 36), 1.0);
    assert_eq!(tier_multiplier(rb, 37), 0.8);
    assert_eq!(tier_multiplier(Some(Position::WR), 48), 1.0);
    assert_eq!(tier_multiplier(Some(Position::TE), 3), 2.0);
    assert_eq!(tier_multiplier(Some(Position::QB), 19), 0.7);
    assert_eq!(tier_multiplier(Some(Position::DEF), 1), 1.2);
    assert_eq!(tier_multiplier(None, 1), 1.0);

    assert_eq!(position_weight(Some(Position::TE)), 1.1);
    assert_eq!(position_weight(Some(Position::K)), 0.4);
    assert_eq!(position_weight(None), 1.0);
}

#[test]
fn test_first_round_bonus() {
    let first = draft_value(10, 1, "WR", 10, 15.0);
    let second = draft_value(10, 2, "WR", 10, 15.0);
    assert!(first > second);
}

#[test]
fn test_score_snake_draft() {
    let picks = vec![pick("a", 1, 1, 1, "RB"), pick("b", 2, 1, 2, "WR")];
    let stats: HashMap<String, StatLine> = [
        ("a".to_string(), stat_line(400.0, 16.0, 1.0)),
        ("b".to_string(), stat_line(0.0, 0.0, 0.0)),
    ]
    .into_iter()
    .collect();

    let scored = score_draft(&draft("snake"), &picks, &stats, &PlayerDirectory::new(), ScoringFormat::Ppr);

    assert_eq!(scored[0].name, "First A");
    assert_eq!(scored[0].season_ppg, 25.0);
    assert_eq!(scored[0].position_rank, 1);
    assert_eq!(scored[0].value_display, "3.4");
    assert_eq!(scored[1].value, 0.0);
}

#[test]
fn test_score_auction_uses_price() {
    let mut p = pick("a", 40, 4, 1, "RB");
    p.metadata.amount = Some("10".to_string());
    let stats: HashMap<String, StatLine> =
        [("a".to_string(), stat_line(200.0, 16.0, 5.0))].into_iter().collect();

    let scored = score_draft(&draft("auction"), &[p], &stats, &PlayerDirectory::new(), ScoringFormat::Ppr);

    assert_eq!(scored[0].amount, Some(10));
    assert_eq!(scored[0].round, 4);
    assert_eq!(scored[0].value, draft_value(10, 1, "RB", 5, 12.5));
}

#[test]
fn test_draft_awards() {
    let scored = vec![
        ScoredPick { value: 2.0, ..scored_pick("a", 1, 1) },
        ScoredPick { value: -1.0, ..scored_pick("b", 2, 1) },
        ScoredPick { value: 3.0, is_keeper: true, ..scored_pick("c", 1, 2) },
        ScoredPick { value: -2.5, ..scored_pick("d", 2, 8) },
        ScoredPick { value: 1.0, ..scored_pick("e", 2, 3) },
    ];

    let awards = draft_awards(&scored);

    assert_eq!(awards.most_valuable_pick.unwrap().player_id, PlayerId::new("a"));
    assert_eq!(awards.least_valuable_early_pick.unwrap().player_id, PlayerId::new("b"));
    let best = awards.most_impressive_draft.unwrap();
    assert_eq!(best.roster_id, RosterId::new(1));
    assert_eq!(best.picks, 1);
    assert_eq!(awards.grades.len(), 2);
    assert_eq!(awards.grades[1].mean_value, -0.83);
}

#[test]
fn test_draft_awards_empty() {
    assert_eq!(draft_awards(&[]), DraftAwards::default());
}

fn scored_pick(player: &str, roster: u32, round: u32) -> ScoredPick {
    ScoredPick {
        player_id: PlayerId::new(player),
        name: player.to_string(),
        position: "RB".to_string(),
        pick_no: round * 10,
        round,
        roster_id: Some(RosterId::new(roster)),
        picked_by: None,
        amount: None,
        is_keeper: false,
        season_ppg: 0.0,
        position_rank: 0,
        value: 0.0,
        value_display: "0.0".to_string(),
    }
}
