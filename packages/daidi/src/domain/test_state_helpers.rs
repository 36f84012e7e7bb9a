//! Test-only game state helpers for domain unit tests.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::rules::{RuleVariant, PLAYERS};
use crate::domain::state::{
    GameState, Phase, PlayerKind, PlayerProfile, RoundState, Seat, StrategyTier,
};

/// Four computer profiles on the same tier.
pub fn profiles(tier: StrategyTier) -> [PlayerProfile; PLAYERS] {
    std::array::from_fn(|i| PlayerProfile {
        name: format!("seat{i}"),
        kind: PlayerKind::Computer(tier),
    })
}

/// Build an in-play state from token hands, with an empty table and `turn`
/// to act.
///
/// Hands come as whitespace-separated tokens and are sorted on the way in.
/// Tests that need the opening phase or a standing table play adjust those
/// fields directly.
pub fn game_with_hands(variant: RuleVariant, hands: [&str; PLAYERS], turn: Seat) -> GameState {
    let hands = hands.map(|tokens| {
        let mut hand = try_parse_cards(tokens.split_whitespace()).unwrap();
        hand.sort_unstable();
        hand
    });
    GameState {
        variant,
        phase: Phase::InPlay,
        turn: Some(turn),
        players: profiles(StrategyTier::Smart1),
        hands,
        round: RoundState::empty(),
        scores_total: [0; PLAYERS],
        winner: None,
    }
}
