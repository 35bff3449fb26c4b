use serde::{Deserialize, Serialize};
use tally_core::TableSettings;

/// Top-level configuration file layout.
///
/// ```toml
/// [table]
/// collation = "natural"
/// identity = "derived"
/// initial_sort = { column = "total", direction = "descending" }
///
/// [display]
/// show_ids = true
/// total_precision = 2
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Sorting behaviour handed to every table instance.
    pub table: TableSettings,
    /// Text rendering options for the preview tool.
    pub display: DisplayConfig,
}

/// How the preview tool prints rows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print the derived record id as the first column.
    pub show_ids: bool,
    /// Decimal places used for the total column.
    pub total_precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_ids: false,
            total_precision: 2,
        }
    }
}
