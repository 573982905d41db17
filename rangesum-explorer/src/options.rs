use alloc::vec;
use alloc::vec::Vec;

/// Initial state for an [`crate::Explorer`] session.
///
/// Ranges and indexes are signed because they usually come straight from user input; they are
/// validated when a query or update runs, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExplorerOptions {
    pub values: Vec<i64>,
    /// Pending query range (inclusive), edited by the user before running it.
    pub query_range: (i64, i64),
    /// Range shown by the highlight before the first query runs.
    pub shown_range: (i64, i64),
    pub update_index: i64,
    pub update_value: i64,
    /// Whether the highlight starts visible.
    pub show_highlight: bool,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self::new(vec![1, 3, 5, 7, 9, 11])
    }
}

impl ExplorerOptions {
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        Self {
            values: values.into(),
            query_range: (1, 4),
            shown_range: (0, 2),
            update_index: 0,
            update_value: 0,
            show_highlight: false,
        }
    }

    pub fn with_values(mut self, values: impl Into<Vec<i64>>) -> Self {
        self.values = values.into();
        self
    }

    pub fn with_query_range(mut self, start: i64, end: i64) -> Self {
        self.query_range = (start, end);
        self
    }

    pub fn with_shown_range(mut self, start: i64, end: i64) -> Self {
        self.shown_range = (start, end);
        self
    }

    pub fn with_update(mut self, index: i64, value: i64) -> Self {
        self.update_index = index;
        self.update_value = value;
        self
    }

    pub fn with_show_highlight(mut self, show_highlight: bool) -> Self {
        self.show_highlight = show_highlight;
        self
    }
}
