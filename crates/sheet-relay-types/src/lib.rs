//! # Sheet Relay Types
//!
//! Transient request and response shapes for the Sheet Relay.
//!
//! Nothing here outlives a single request. The relay and the header inspector
//! both depend on this crate:
//!
//! ```text
//!          sheet-relay-types (this crate)
//!                   │
//!        ┌──────────┴───────────┐
//!        ▼                      ▼
//! sheet-relay-core      sheet-header-inspector
//!        │
//!        ▼
//! sheet-relay-server
//! ```

pub mod models;

pub use models::{
    parse_body_or_raw, AppendPayload, ErrorBody, ParsedBody, SheetParams, SheetQuery,
    ValuesResponse, NAMES_SENTINEL, RELAY_PATH, TOKEN_FIELD,
};
