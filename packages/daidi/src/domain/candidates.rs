//! Candidate enumeration: every legal play from a hand against a table.
//!
//! Generators are shape-targeted and bounded (rank groups, run windows,
//! suit buckets); nothing here walks the power set. An empty result means
//! the seat has to pass.

use std::collections::BTreeMap;

use super::cards_types::{Card, Rank, Suit, RANKS, SUITS};
use super::comparing::beats;
use super::patterns::{is_straight_set, Pattern, Shape, SHAPES};
use super::rules::{RuleVariant, StraightScheme, VariantTable};

/// Enumerate the distinct legal plays from `hand` against the table,
/// grouped by shape. When leading (`on_table` is None) every shape the hand
/// supports shows up; when following, only plays that beat the table play.
/// Each group is sorted by (cardinality, strength key) ascending.
pub fn playable_patterns(
    hand: &[Card],
    on_table: Option<&Pattern>,
    variant: RuleVariant,
) -> BTreeMap<Shape, Vec<Pattern>> {
    let mut sorted = hand.to_vec();
    sorted.sort_unstable();

    let table = variant.table();
    let mut out = BTreeMap::new();
    for shape in SHAPES {
        if !worth_generating(shape, on_table, table) {
            continue;
        }
        let mut keep: Vec<Pattern> = generate(shape, &sorted, variant, on_table)
            .into_iter()
            .filter(|p| beats(p, on_table, variant))
            .collect();
        if keep.is_empty() {
            continue;
        }
        keep.sort_by(|a, b| (a.cards.len(), a.key).cmp(&(b.cards.len(), b.key)));
        out.insert(shape, keep);
    }
    out
}

/// Drop plays that do not contain `card`; prune emptied shape groups.
/// Used for the opening play, which must contain the lead card.
pub(crate) fn retain_containing(map: &mut BTreeMap<Shape, Vec<Pattern>>, card: Card) {
    for plays in map.values_mut() {
        plays.retain(|p| p.cards.contains(&card));
    }
    map.retain(|_, plays| !plays.is_empty());
}

/// Following a play, only its own shape and higher trump tiers can answer.
fn worth_generating(shape: Shape, on_table: Option<&Pattern>, table: &VariantTable) -> bool {
    match on_table {
        None => true,
        Some(current) => {
            shape == current.shape || table.trump_tier(shape) > table.trump_tier(current.shape)
        }
    }
}

fn generate(
    shape: Shape,
    sorted: &[Card],
    variant: RuleVariant,
    on_table: Option<&Pattern>,
) -> Vec<Pattern> {
    match shape {
        Shape::Single => sorted
            .iter()
            .map(|c| Pattern::from_sorted(Shape::Single, vec![*c]))
            .collect(),
        Shape::Pair => of_a_kind(sorted, 2, Shape::Pair),
        Shape::Triple => of_a_kind(sorted, 3, Shape::Triple),
        Shape::Bomb => of_a_kind(sorted, 4, Shape::Bomb),
        Shape::Straight => straights(sorted, variant, straight_target_len(on_table)),
        Shape::Flush => flushes(sorted, variant),
        Shape::FullHouse => full_houses(sorted),
        Shape::StraightFlush => straight_flushes(sorted, variant),
    }
}

/// When following a straight, only runs of the same length can answer.
fn straight_target_len(on_table: Option<&Pattern>) -> Option<usize> {
    match on_table {
        Some(p) if p.shape == Shape::Straight => Some(p.cards.len()),
        _ => None,
    }
}

/// Cards of `sorted` grouped by rank, ascending.
fn rank_groups(sorted: &[Card]) -> Vec<(Rank, Vec<Card>)> {
    let mut groups: Vec<(Rank, Vec<Card>)> = Vec::new();
    for card in sorted {
        match groups.last_mut() {
            Some((rank, cards)) if *rank == card.rank => cards.push(*card),
            _ => groups.push((card.rank, vec![*card])),
        }
    }
    groups
}

fn suit_bucket(sorted: &[Card], suit: Suit) -> Vec<Card> {
    sorted.iter().copied().filter(|c| c.suit == suit).collect()
}

fn of_a_kind(sorted: &[Card], size: usize, shape: Shape) -> Vec<Pattern> {
    let mut out = Vec::new();
    for (_, group) in rank_groups(sorted) {
        for combo in combinations(&group, size) {
            out.push(Pattern::from_sorted(shape, combo));
        }
    }
    out
}

fn straights(sorted: &[Card], variant: RuleVariant, only_len: Option<usize>) -> Vec<Pattern> {
    let table = variant.table();
    let groups = rank_groups(sorted);
    let mut out = Vec::new();
    for len in table.straight_lengths.clone() {
        if len > sorted.len() {
            break;
        }
        if only_len.is_some_and(|want| want != len) {
            continue;
        }
        for window in run_windows(table.straight_scheme, len) {
            for mut combo in expand_window(&groups, &window) {
                combo.sort_unstable();
                // Five-card single-suit runs belong to the straight flush.
                if combo.len() == 5 && combo.windows(2).all(|w| w[0].suit == w[1].suit) {
                    continue;
                }
                out.push(Pattern::from_sorted(Shape::Straight, combo));
            }
        }
    }
    out
}

fn flushes(sorted: &[Card], variant: RuleVariant) -> Vec<Pattern> {
    let mut out = Vec::new();
    for suit in SUITS {
        let bucket = suit_bucket(sorted, suit);
        for combo in combinations(&bucket, 5) {
            // Pure runs belong to the straight flush.
            if is_straight_set(&combo, variant) {
                continue;
            }
            out.push(Pattern::from_sorted(Shape::Flush, combo));
        }
    }
    out
}

fn straight_flushes(sorted: &[Card], variant: RuleVariant) -> Vec<Pattern> {
    let table = variant.table();
    let mut out = Vec::new();
    for suit in SUITS {
        let bucket = suit_bucket(sorted, suit);
        if bucket.len() < 5 {
            continue;
        }
        let groups = rank_groups(&bucket);
        for window in run_windows(table.straight_scheme, 5) {
            for mut combo in expand_window(&groups, &window) {
                combo.sort_unstable();
                out.push(Pattern::from_sorted(Shape::StraightFlush, combo));
            }
        }
    }
    out
}

fn full_houses(sorted: &[Card]) -> Vec<Pattern> {
    let groups = rank_groups(sorted);
    let mut out = Vec::new();
    for (triple_rank, triple_group) in &groups {
        if triple_group.len() < 3 {
            continue;
        }
        for (pair_rank, pair_group) in &groups {
            if pair_rank == triple_rank || pair_group.len() < 2 {
                continue;
            }
            for triple in combinations(triple_group, 3) {
                for pair in combinations(pair_group, 2) {
                    let mut cards = triple.clone();
                    cards.extend_from_slice(&pair);
                    cards.sort_unstable();
                    out.push(Pattern::from_sorted(Shape::FullHouse, cards));
                }
            }
        }
    }
    out
}

/// Rank windows that form legal runs at the given length.
fn run_windows(scheme: StraightScheme, len: usize) -> Vec<Vec<Rank>> {
    let mut windows = Vec::new();
    match scheme {
        StraightScheme::DeuceTops => {
            for start in 0..=(RANKS.len() - len) {
                windows.push(RANKS[start..start + len].to_vec());
            }
        }
        StraightScheme::DeuceWraps => {
            // Natural runs live in 3..A (every rank below the deuce).
            let natural = &RANKS[..RANKS.len() - 1];
            if len <= natural.len() {
                for start in 0..=(natural.len() - len) {
                    windows.push(natural[start..start + len].to_vec());
                }
            }
            if len == 5 {
                windows.push(vec![
                    Rank::Ace,
                    Rank::Two,
                    Rank::Three,
                    Rank::Four,
                    Rank::Five,
                ]);
                windows.push(vec![
                    Rank::Two,
                    Rank::Three,
                    Rank::Four,
                    Rank::Five,
                    Rank::Six,
                ]);
            }
        }
    }
    windows
}

/// Every way to pick one card per rank of the window from the grouped hand.
/// Empty when some window rank is missing.
fn expand_window(groups: &[(Rank, Vec<Card>)], window: &[Rank]) -> Vec<Vec<Card>> {
    let mut choice_sets: Vec<&[Card]> = Vec::with_capacity(window.len());
    for rank in window {
        match groups.iter().find(|(r, _)| r == rank) {
            Some((_, cards)) => choice_sets.push(cards),
            None => return Vec::new(),
        }
    }
    let mut acc: Vec<Vec<Card>> = vec![Vec::new()];
    for set in choice_sets {
        let mut next = Vec::with_capacity(acc.len() * set.len());
        for combo in &acc {
            for card in set {
                let mut grown = combo.clone();
                grown.push(*card);
                next.push(grown);
            }
        }
        acc = next;
    }
    acc
}

/// All k-card subsets of `cards`, preserving order.
fn combinations(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    fn rec(
        cards: &[Card],
        k: usize,
        start: usize,
        current: &mut Vec<Card>,
        out: &mut Vec<Vec<Card>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        let needed = k - current.len();
        let mut i = start;
        while i + needed <= cards.len() {
            current.push(cards[i]);
            rec(cards, k, i + 1, current, out);
            current.pop();
            i += 1;
        }
    }

    let mut out = Vec::new();
    if k == 0 || k > cards.len() {
        return out;
    }
    let mut current = Vec::with_capacity(k);
    rec(cards, k, 0, &mut current, &mut out);
    out
}
