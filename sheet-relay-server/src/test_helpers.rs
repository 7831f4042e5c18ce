//! Test helpers for sheet-relay-server unit tests.

use sheet_relay_core::{RelayConfig, RelayState};

/// Relay state with nothing configured; every upstream-bound request fails
/// its configuration check before leaving the process.
pub fn test_relay_state() -> RelayState {
    RelayState::new(RelayConfig::default()).expect("failed to create test RelayState")
}
