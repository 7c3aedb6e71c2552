//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

pub use fixtures::{FailingSink, MockPin, MockTime, PinProbe, TestConfig};
use tickspan::{AnalyzerId, Mode, Registry};

/// Registry type used by all integration tests: mock counters, recording
/// pins, round-number clock rates, default capacity.
pub type TestRegistry = Registry<MockTime, MockPin, TestConfig>;

// ============================================================================
// Registry Creation Helpers
// ============================================================================

/// Create an empty registry plus a clock handle shared with it.
pub fn test_registry() -> (TestRegistry, MockTime) {
    let time = MockTime::new();
    let registry = Registry::new(time.clone());
    (registry, time)
}

/// Create a registry with one cycle-mode analyzer already registered.
pub fn registry_with_analyzer(name: &'static str) -> (TestRegistry, MockTime, AnalyzerId) {
    let (mut registry, time) = test_registry();
    let id = registry.create(name, Mode::Cycles, None).unwrap();
    (registry, time, id)
}

// ============================================================================
// Scenario Helpers
// ============================================================================

/// Run one complete `start`..`stop` interval over the given cycle samples.
pub fn run_interval(registry: &mut TestRegistry, time: &MockTime, id: AnalyzerId, start: u32, stop: u32) {
    time.set_cycles(start);
    registry.start(id).unwrap();
    time.set_cycles(stop);
    registry.stop(id).unwrap();
}

/// Capture the status line of a single analyzer.
pub fn status_line(registry: &TestRegistry, id: AnalyzerId) -> String {
    let mut out = heapless::String::<256>::new();
    registry.status(id, &mut out).unwrap();
    out.as_str().to_string()
}

/// Capture the bulk status report.
pub fn status_all_lines(registry: &TestRegistry) -> Result<String, (String, tickspan::TimingError)> {
    let mut out = heapless::String::<1024>::new();
    match registry.status_all(&mut out) {
        Ok(()) => Ok(out.as_str().to_string()),
        Err(e) => Err((out.as_str().to_string(), e)),
    }
}
