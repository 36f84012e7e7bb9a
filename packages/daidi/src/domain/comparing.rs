//! Play comparison under the variant trump tables.

use super::patterns::Pattern;
use super::rules::RuleVariant;

/// Whether `candidate` beats the play on the table.
///
/// With nothing on the table any classified play stands (the first-play
/// lead-card rule belongs to the turn engine, not here). Otherwise the
/// variant table's trump tiers decide first: a higher tier wins outright,
/// a lower tier loses outright. Within a tier the candidate must match the
/// table play's shape and cardinality, and the higher strength key wins.
pub fn beats(candidate: &Pattern, on_table: Option<&Pattern>, variant: RuleVariant) -> bool {
    let Some(current) = on_table else {
        return true;
    };
    let table = variant.table();
    let candidate_tier = table.trump_tier(candidate.shape);
    let current_tier = table.trump_tier(current.shape);
    if candidate_tier != current_tier {
        return candidate_tier > current_tier;
    }
    candidate.shape == current.shape
        && candidate.cards.len() == current.cards.len()
        && candidate.key > current.key
}
