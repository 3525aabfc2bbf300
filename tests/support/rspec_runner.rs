//! Serial rspec runner for suites that tick a Bevy `App`.

use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use std::sync::Arc;

/// Runs `suite` one example at a time and fails the test on the first
/// failed example.
///
/// Plugin scenarios share one locked `App` through `LocomotionFixture`, so
/// they must not run in parallel.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid rspec configuration: {e}"));
    let report = Arc::new(Logger::new(std::io::stdout()));
    Runner::new(config, vec![report]).run(suite);
}
