//! Request/response models.

mod body;
mod payload;
mod query;
mod values;

pub use body::{parse_body_or_raw, ErrorBody, ParsedBody};
pub use payload::{AppendPayload, TOKEN_FIELD};
pub use query::{SheetParams, SheetQuery, NAMES_SENTINEL, RELAY_PATH};
pub use values::ValuesResponse;
