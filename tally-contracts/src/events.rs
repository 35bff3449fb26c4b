use tally_model::{RecordId, SortColumn};

/// Events a rendering collaborator reports back into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "payload"))]
pub enum TableEvent {
    /// A column header was activated.
    RequestSort(SortColumn),
    /// The set of highlighted rows changed. Selection is owned by the view;
    /// the table only remembers the last report.
    SelectionChanged(Vec<RecordId>),
}
