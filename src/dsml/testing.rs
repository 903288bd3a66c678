//! Shared test fixtures
//!
//! Canonical DSML sources used across unit and integration tests. Tests
//! should prefer these over ad-hoc copies so fixture changes propagate.

/// A coin-operated turnstile: two states, two inputs, two outputs, with
/// both an empty-output self-loop and output-producing transitions.
pub const TURNSTILE: &str = "\
# A coin-operated turnstile
state entry locked
state unlocked
input coin push
output unlock lock

trans locked : coin : unlocked : unlock
trans locked : push : locked : -
trans unlocked : coin : unlocked : -
trans unlocked : push : locked : lock
";

/// The minimal two-state machine: entry state A on input x moves to the
/// final state B emitting y; B loops on x with no output.
pub const TWO_STATE_MACHINE: &str = "\
state entry A
state final B
input x
output y
trans A : x : B : y
trans B : x : B : -
";
