//! End-to-end flows: scripted games and strategy-driven games.

use crate::ai::{strategy_for_tier, Move};
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::cards_types::Card;
use crate::domain::events::{events_for_pass, events_for_play, GameEvent};
use crate::domain::patterns::{classify, Shape};
use crate::domain::player_view::seat_view;
use crate::domain::playing::{submit_pass, submit_play};
use crate::domain::rules::RuleVariant;
use crate::domain::scoring::settle;
use crate::domain::state::{GameState, Phase, PlayerKind, PlayerProfile, StrategyTier, TablePlay};
use crate::domain::test_state_helpers::{game_with_hands, profiles};
use crate::errors::GameError;

fn cards(tokens: &str) -> Vec<Card> {
    try_parse_cards(tokens.split_whitespace()).unwrap()
}

#[test]
fn scripted_game_runs_from_opening_to_settlement() {
    let mut state = game_with_hands(
        RuleVariant::South,
        ["3D 5C 9H", "4S 8D JC", "6H TD QS", "7S KC AC"],
        0,
    );
    state.phase = Phase::Opening;

    submit_play(&mut state, 0, &cards("3D")).unwrap();
    assert_eq!(state.phase, Phase::InPlay);
    submit_play(&mut state, 1, &cards("4S")).unwrap();
    submit_play(&mut state, 2, &cards("6H")).unwrap();
    submit_play(&mut state, 3, &cards("7S")).unwrap();
    submit_play(&mut state, 0, &cards("9H")).unwrap();
    submit_play(&mut state, 1, &cards("JC")).unwrap();
    submit_play(&mut state, 2, &cards("QS")).unwrap();
    submit_play(&mut state, 3, &cards("KC")).unwrap();

    submit_pass(&mut state, 0).unwrap();
    submit_pass(&mut state, 1).unwrap();
    let closing = submit_pass(&mut state, 2).unwrap();
    assert!(closing.round_closed);
    assert!(events_for_pass(2, &closing).contains(&GameEvent::RoundClosed { leader: 3 }));
    assert_eq!(state.turn, Some(3));

    let final_play = submit_play(&mut state, 3, &cards("AC")).unwrap();
    assert!(final_play.game_over);
    assert!(events_for_play(3, &final_play).contains(&GameEvent::GameEnded { winner: 3 }));

    let deltas = settle(&mut state).unwrap();
    assert_eq!(deltas, [2, 2, 2, -6]);
    assert_eq!(state.scores_total, [2, 2, 2, -6]);
}

#[test]
fn a_bomb_answers_any_ordinary_shape_in_both_variants() {
    for variant in [RuleVariant::North, RuleVariant::South] {
        let mut state = game_with_hands(
            variant,
            [
                "6S 6H 6C 6D 3S",
                "4H 8C JD QD KD",
                "7S 8D QH 9C TC",
                "3H TD KH AH AS",
            ],
            0,
        );
        state.round.table = Some(TablePlay {
            seat: 3,
            pattern: classify(&cards("2C 2D 9S 9H 9D"), variant).unwrap(),
        });

        let outcome = submit_play(&mut state, 0, &cards("6S 6H 6C 6D")).unwrap();
        assert_eq!(outcome.pattern.shape, Shape::Bomb, "{variant:?}");
    }
}

#[test]
fn a_straight_flush_tops_a_bomb_only_in_the_north_variant() {
    let hands = [
        "5H 6H 7H 8H 9H",
        "4C 8C QD KD 3C",
        "7C 8S QS 9D TC",
        "3S TD KH AH AS",
    ];
    for (variant, should_accept) in [(RuleVariant::North, true), (RuleVariant::South, false)] {
        let mut state = game_with_hands(variant, hands, 0);
        state.round.table = Some(TablePlay {
            seat: 3,
            pattern: classify(&cards("JS JH JC JD"), variant).unwrap(),
        });

        let result = submit_play(&mut state, 0, &cards("5H 6H 7H 8H 9H"));
        if should_accept {
            assert_eq!(result.unwrap().pattern.shape, Shape::StraightFlush);
        } else {
            assert_eq!(
                result.unwrap_err(),
                GameError::DoesNotBeat {
                    candidate: Shape::StraightFlush,
                    on_table: Shape::Bomb,
                }
            );
        }
    }
}

#[test]
fn deuce_topped_straights_only_exist_in_the_north_variant() {
    let hands = [
        "JD QD KH AC 2S",
        "4C 8C QC KD 3C",
        "7C 8S QS 9D TC",
        "3S TD 6D AH AS",
    ];

    let mut north = game_with_hands(RuleVariant::North, hands, 0);
    north.round.table = Some(TablePlay {
        seat: 3,
        pattern: classify(&cards("9C TH JH QH KC"), RuleVariant::North).unwrap(),
    });
    let outcome = submit_play(&mut north, 0, &cards("JD QD KH AC 2S")).unwrap();
    assert_eq!(outcome.pattern.shape, Shape::Straight);

    let mut south = game_with_hands(RuleVariant::South, hands, 0);
    south.round.table = Some(TablePlay {
        seat: 3,
        pattern: classify(&cards("9C TH JH QH KC"), RuleVariant::South).unwrap(),
    });
    assert_eq!(
        submit_play(&mut south, 0, &cards("JD QD KH AC 2S")).unwrap_err(),
        GameError::IllegalPattern
    );
}

#[test]
fn south_wrap_straights_answer_natural_straights() {
    let mut state = game_with_hands(
        RuleVariant::South,
        [
            "AC 2S 3H 4D 5S",
            "4C 8C QC KD 3C",
            "7C 8S QS 9D TC",
            "3S TD 6D AH KS",
        ],
        0,
    );
    state.round.table = Some(TablePlay {
        seat: 3,
        pattern: classify(&cards("9C TH JH QH KC"), RuleVariant::South).unwrap(),
    });

    let outcome = submit_play(&mut state, 0, &cards("AC 2S 3H 4D 5S")).unwrap();
    assert_eq!(outcome.pattern.shape, Shape::Straight);
}

#[test]
fn mixed_strategy_tiers_finish_a_seeded_game() {
    let tiers = [
        StrategyTier::Smart1,
        StrategyTier::Smart2,
        StrategyTier::Smart3,
        StrategyTier::Smart2,
    ];
    let players = std::array::from_fn(|i| PlayerProfile {
        name: format!("seat{i}"),
        kind: PlayerKind::Computer(tiers[i]),
    });
    let mut state = GameState::new(RuleVariant::South, players, 2024);

    let mut guard = 0;
    while let Some(seat) = state.turn {
        guard += 1;
        assert!(guard < 1_000, "strategies failed to finish the game");

        let PlayerKind::Computer(tier) = state.players[seat as usize].kind else {
            panic!("all seats are computers");
        };
        let strategy = strategy_for_tier(tier);
        let view = seat_view(&state, seat).unwrap();
        match strategy.choose_move(&view).unwrap() {
            Move::Play(chosen) => {
                submit_play(&mut state, seat, &chosen).unwrap();
            }
            Move::Pass => {
                submit_pass(&mut state, seat).unwrap();
            }
        }
    }

    assert_eq!(state.phase, Phase::GameOver);
    assert!(state.winner.is_some());
    let deltas = settle(&mut state).unwrap();
    assert_eq!(deltas.iter().sum::<i64>(), 0);
}

#[test]
fn every_tier_finishes_games_under_both_variants() {
    for variant in [RuleVariant::North, RuleVariant::South] {
        for tier in [
            StrategyTier::Smart1,
            StrategyTier::Smart2,
            StrategyTier::Smart3,
        ] {
            let mut state = GameState::new(variant, profiles(tier), 7_777);
            let mut guard = 0;
            while let Some(seat) = state.turn {
                guard += 1;
                assert!(guard < 1_000, "{variant:?}/{tier:?} stalled");

                let strategy = strategy_for_tier(tier);
                let view = seat_view(&state, seat).unwrap();
                match strategy.choose_move(&view).unwrap() {
                    Move::Play(chosen) => {
                        submit_play(&mut state, seat, &chosen).unwrap();
                    }
                    Move::Pass => {
                        submit_pass(&mut state, seat).unwrap();
                    }
                }
            }
            assert_eq!(state.phase, Phase::GameOver, "{variant:?}/{tier:?}");
            settle(&mut state).unwrap();
            assert_eq!(state.scores_total.iter().sum::<i64>(), 0);
        }
    }
}

#[test]
fn game_state_survives_a_json_round_trip() {
    let mut state = GameState::new(RuleVariant::North, profiles(StrategyTier::Smart3), 5);
    let opener = state.turn.unwrap();
    submit_play(&mut state, opener, &cards("3D")).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
