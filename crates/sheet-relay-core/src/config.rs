//! Relay configuration.
//!
//! Every setting is looked up in a priority-ordered list of names; the first
//! non-empty value wins and a missing setting resolves to the empty string.

use std::collections::HashMap;

/// Spreadsheet id for reads.
pub const SHEET_ID_KEYS: &[&str] = &["SHEET_ID", "REACT_APP_SHEET_ID"];
/// Google API key for reads.
pub const API_KEY_KEYS: &[&str] = &["SHEETS_API_KEY", "REACT_APP_API_KEY"];
/// Append endpoint for writes.
pub const APPEND_URL_KEYS: &[&str] = &["SHEET_APPEND_URL", "REACT_APP_SHEET_APPEND_URL"];
/// Shared secret injected into writes.
pub const APPEND_TOKEN_KEYS: &[&str] = &["SHEET_APPEND_TOKEN", "REACT_APP_SHEET_APPEND_TOKEN"];
/// Override for the Sheets REST API base URL.
pub const SHEETS_API_BASE_KEYS: &[&str] = &["SHEETS_API_BASE_URL"];

pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

/// A named source of configuration values.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ConfigSource for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| (*v).to_string())
    }
}

/// Returns the first non-empty value among `keys`, or an empty string.
pub fn resolve_first<S: ConfigSource + ?Sized>(source: &S, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| source.get(key))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Resolved relay settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub sheet_id: String,
    pub api_key: String,
    pub append_url: String,
    pub append_token: Option<String>,
    pub sheets_api_base: String,
}

impl RelayConfig {
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> Self {
        let append_token = resolve_first(source, APPEND_TOKEN_KEYS);
        let sheets_api_base = resolve_first(source, SHEETS_API_BASE_KEYS);
        let sheets_api_base = if sheets_api_base.is_empty() {
            DEFAULT_SHEETS_API_BASE.to_string()
        } else {
            sheets_api_base.trim_end_matches('/').to_string()
        };

        Self {
            sheet_id: resolve_first(source, SHEET_ID_KEYS),
            api_key: resolve_first(source, API_KEY_KEYS),
            append_url: resolve_first(source, APPEND_URL_KEYS),
            append_token: Some(append_token).filter(|t| !t.is_empty()),
            sheets_api_base,
        }
    }

    pub fn from_env() -> Self {
        Self::from_source(&EnvSource)
    }

    pub fn has_read_credentials(&self) -> bool {
        !self.sheet_id.is_empty() && !self.api_key.is_empty()
    }

    pub fn has_append_url(&self) -> bool {
        !self.append_url.is_empty()
    }
}
