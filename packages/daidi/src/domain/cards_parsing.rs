//! Card parsing and formatting in the 2-character token form ("3D", "TS").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::GameError;

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let rank_ch = chars.next().ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        let suit_ch = chars.next().ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        if chars.next().is_some() {
            return Err(GameError::ParseCard(s.to_string()));
        }
        let rank = Rank::from_char(rank_ch).ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        let suit = Suit::from_char(suit_ch).ok_or_else(|| GameError::ParseCard(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_char(), self.suit.as_char())
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Cards.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
