//! How to register a strategy
//!
//! 1) Implement `Strategy` for your type in its module.
//! 2) Add a new `StrategyFactory` entry to the static list with stable
//!    `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use crate::ai::{Smart1, Smart2, Smart3, Strategy};

/// Factory definition for constructing strategy implementations.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn Strategy + Send + Sync>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: Smart1::NAME,
        version: Smart1::VERSION,
        make: make_smart1,
    },
    StrategyFactory {
        name: Smart2::NAME,
        version: Smart2::VERSION,
        make: make_smart2,
    },
    StrategyFactory {
        name: Smart3::NAME,
        version: Smart3::VERSION,
        make: make_smart3,
    },
];

/// Returns the statically registered strategy factories.
pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

/// Finds a registered strategy factory by its name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_smart1(seed: Option<u64>) -> Box<dyn Strategy + Send + Sync> {
    Box::new(Smart1::new(seed))
}

fn make_smart2(seed: Option<u64>) -> Box<dyn Strategy + Send + Sync> {
    Box::new(Smart2::new(seed))
}

fn make_smart3(seed: Option<u64>) -> Box<dyn Strategy + Send + Sync> {
    Box::new(Smart3::new(seed))
}
