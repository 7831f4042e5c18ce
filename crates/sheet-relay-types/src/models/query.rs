//! Read-path query parameters.

use serde::{Deserialize, Serialize};

/// Path the relay is mounted on.
pub const RELAY_PATH: &str = "/api/append";

/// Sheet name that asks for the list of sheet titles instead of cell values.
pub const NAMES_SENTINEL: &str = "__names__";

/// Raw query-string parameters of a read request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SheetParams {
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub names: Option<String>,
}

/// A parsed read request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetQuery {
    /// Sheet (tab) name; empty when not supplied.
    pub sheet: String,
    /// Cell range inside the sheet, e.g. `A1:B2`.
    pub range: Option<String>,
    /// Return the sheet titles rather than a range of values.
    pub names_only: bool,
}

impl SheetQuery {
    pub fn from_params(params: SheetParams) -> Self {
        let sheet = params.sheet.unwrap_or_default();
        let names_only = sheet == NAMES_SENTINEL || params.names.as_deref() == Some("1");
        let range = params.range.filter(|r| !r.is_empty());

        Self { sheet, range, names_only }
    }

    /// A1-notation range for the values endpoint.
    ///
    /// Returns `None` when no sheet was given. The sheet name alone selects the
    /// whole sheet; otherwise the result is `"{sheet}!{range}"`.
    pub fn a1_range(&self) -> Option<String> {
        if self.sheet.is_empty() {
            return None;
        }
        Some(match &self.range {
            Some(range) => format!("{}!{}", self.sheet, range),
            None => self.sheet.clone(),
        })
    }
}

impl From<SheetParams> for SheetQuery {
    fn from(params: SheetParams) -> Self {
        Self::from_params(params)
    }
}
