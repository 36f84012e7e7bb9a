//! Strategy module - automated seat decisions.
//!
//! This module provides:
//! - the [`Strategy`] trait and [`Move`] action type
//! - three deterministic strategy tiers (Smart1, Smart2, Smart3)
//! - a static registry for name-based construction

mod registry;
mod smart1;
mod smart2;
mod smart3;
mod trait_def;

pub use registry::{by_name, registered_strategies, StrategyFactory};
pub use smart1::Smart1;
pub use smart2::Smart2;
pub use smart3::Smart3;
pub use trait_def::{Move, Strategy, StrategyError};

use crate::domain::state::StrategyTier;

/// Construct the strategy backing a computer seat's tier.
pub fn strategy_for_tier(tier: StrategyTier) -> Box<dyn Strategy + Send + Sync> {
    match tier {
        StrategyTier::Smart1 => Box::new(Smart1::new(None)),
        StrategyTier::Smart2 => Box::new(Smart2::new(None)),
        StrategyTier::Smart3 => Box::new(Smart3::new(None)),
    }
}

/// Create a strategy from its registered name.
///
/// Returns None if the name is unrecognized.
pub fn create_strategy(name: &str, seed: Option<u64>) -> Option<Box<dyn Strategy + Send + Sync>> {
    by_name(name).map(|factory| (factory.make)(seed))
}
