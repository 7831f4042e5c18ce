//! # Sheet Relay Core
//!
//! HTTP relay in front of a Google spreadsheet.
//!
//! ```text
//! sheet-relay-core/src/
//! ├── config.rs       # ordered env lookup -> RelayConfig
//! ├── error.rs        # RelayError + JSON error responses
//! ├── middleware/     # CORS headers on every response
//! ├── relay/          # GET/POST/OPTIONS dispatch on /api/append
//! └── upstream/       # Sheets REST reads, append endpoint writes
//! ```
//!
//! Reads go to the Sheets REST API with a server-held API key. Writes go to an
//! append endpoint with a server-held token injected into the payload, so the
//! browser never sees either secret.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod relay;
pub mod upstream;

pub use config::{resolve_first, ConfigSource, EnvSource, RelayConfig};
pub use error::{ErrorKind, RelayError, RelayResult};
pub use relay::{relay_router, RelayState, ALLOWED_METHODS, RELAY_PATH};
