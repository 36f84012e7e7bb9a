//! Shared proptest configuration for domain property suites.

use proptest::test_runner::Config as ProptestConfig;

/// Consistent case count across the property suites; heavy generators keep
/// the default count from dragging the suite out.
pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}
