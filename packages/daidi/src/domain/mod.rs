//! Domain layer: pure game logic types and helpers.

pub mod candidates;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod comparing;
pub mod dealing;
pub mod events;
pub mod patterns;
pub mod player_view;
pub mod playing;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_patterns;
#[cfg(test)]
mod tests_props_playing;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use candidates::playable_patterns;
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use comparing::beats;
pub use dealing::{deal, derive_deal_seed, full_deck};
pub use events::{events_for_pass, events_for_play, GameEvent};
pub use patterns::{classify, Pattern, Shape};
pub use player_view::{seat_view, SeatView};
pub use playing::{legal_plays, submit_pass, submit_play, PassOutcome, PlayOutcome};
pub use rules::{RuleVariant, VariantTable, PLAYERS};
pub use scoring::settle;
pub use snapshot::{snapshot, GameSnapshot};
pub use state::{GameState, Phase, PlayerKind, PlayerProfile, Seat, StrategyTier};
