use crate::domain::rules::RuleVariant;
use crate::domain::scoring::settle;
use crate::domain::state::{GameState, Phase};
use crate::domain::test_state_helpers::game_with_hands;
use crate::errors::GameError;

/// Finished game: seat 0 went out, the rest hold 3, 10, and 13 cards.
fn finished_state(variant: RuleVariant) -> GameState {
    let mut state = game_with_hands(
        variant,
        [
            "",
            "4H 6H JH",
            "3C 4C 5C 6C 7C 8C 9C TC JC QC",
            "3S 4S 5S 6S 7S 8S 9S TS JS QS KS AS 2S",
        ],
        0,
    );
    state.phase = Phase::GameOver;
    state.winner = Some(0);
    state.turn = None;
    state
}

#[test]
fn settle_rejects_an_unfinished_game() {
    let mut state = game_with_hands(RuleVariant::South, ["3S", "4H", "5C", "6D"], 0);
    assert_eq!(settle(&mut state).unwrap_err(), GameError::GameNotOver);
    assert_eq!(state.scores_total, [0, 0, 0, 0]);
}

#[test]
fn north_settlement_is_one_point_per_card() {
    let mut state = finished_state(RuleVariant::North);
    let deltas = settle(&mut state).unwrap();
    assert_eq!(deltas, [-26, 3, 10, 13]);
}

#[test]
fn south_settlement_doubles_big_losers() {
    let mut state = finished_state(RuleVariant::South);
    let deltas = settle(&mut state).unwrap();
    // Two per card; ten or more cards doubles again.
    assert_eq!(deltas, [-98, 6, 40, 52]);
}

#[test]
fn nine_cards_stay_below_the_south_threshold() {
    let mut state = game_with_hands(
        RuleVariant::South,
        ["", "3C 4C 5C 6C 7C 8C 9C TC JC", "4H", "5S"],
        0,
    );
    state.phase = Phase::GameOver;
    state.winner = Some(0);
    state.turn = None;

    let deltas = settle(&mut state).unwrap();
    assert_eq!(deltas[1], 18);
}

#[test]
fn every_settlement_sums_to_zero() {
    for variant in [RuleVariant::North, RuleVariant::South] {
        let mut state = finished_state(variant);
        let deltas = settle(&mut state).unwrap();
        assert_eq!(deltas.iter().sum::<i64>(), 0, "{variant:?}");
    }
}

#[test]
fn settlement_folds_into_running_totals() {
    let mut state = finished_state(RuleVariant::North);
    state.scores_total = [5, -2, 0, 1];
    let deltas = settle(&mut state).unwrap();
    assert_eq!(deltas, [-26, 3, 10, 13]);
    assert_eq!(state.scores_total, [-21, 1, 10, 14]);
}
