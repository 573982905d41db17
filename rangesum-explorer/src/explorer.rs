use alloc::string::String;
use alloc::vec::Vec;

use rangesum::{Error, RangeSumTree, TreeView};

use crate::{CellMark, ExplorerOptions, QueryHighlight, cell_marks, parse_values, render_outline};

/// A framework-neutral session around a [`RangeSumTree`].
///
/// It keeps what a visual front end needs between frames: the tree, the pending query range
/// and update, the last result or error, and whether the query highlight is shown. Inputs are
/// signed because they usually come straight from text fields; they are validated when a query
/// or update runs.
///
/// This type does not hold any UI objects. Adapters call the setters on input events and read
/// [`Explorer::snapshot`], [`Explorer::highlight`] and [`Explorer::cell_marks`] when drawing.
#[derive(Clone, Debug)]
pub struct Explorer {
    options: ExplorerOptions,
    tree: RangeSumTree,
    query_range: (i64, i64),
    shown_range: (i64, i64),
    update_index: i64,
    update_value: i64,
    show_highlight: bool,
    result: Option<i64>,
    error: Option<Error>,
}

impl Explorer {
    pub fn new(options: ExplorerOptions) -> Self {
        edebug!(
            len = options.values.len(),
            show_highlight = options.show_highlight,
            "Explorer::new"
        );
        Self {
            tree: RangeSumTree::new(options.values.clone()),
            query_range: options.query_range,
            shown_range: options.shown_range,
            update_index: options.update_index,
            update_value: options.update_value,
            show_highlight: options.show_highlight,
            result: None,
            error: None,
            options,
        }
    }

    pub fn options(&self) -> &ExplorerOptions {
        &self.options
    }

    /// Restores the session to its initial options.
    pub fn reset(&mut self) {
        *self = Self::new(self.options.clone());
    }

    pub fn tree(&self) -> &RangeSumTree {
        &self.tree
    }

    pub fn values(&self) -> &[i64] {
        self.tree.values()
    }

    pub fn query_range(&self) -> (i64, i64) {
        self.query_range
    }

    /// The range the highlight refers to: the last successful query, or the initial one.
    pub fn shown_range(&self) -> (i64, i64) {
        self.shown_range
    }

    pub fn pending_update(&self) -> (i64, i64) {
        (self.update_index, self.update_value)
    }

    pub fn result(&self) -> Option<i64> {
        self.result
    }

    pub fn error(&self) -> Option<Error> {
        self.error
    }

    pub fn is_highlight_shown(&self) -> bool {
        self.show_highlight
    }

    /// Replaces the array and rebuilds the tree. Clears the last result/error and hides the
    /// highlight, since node identities now refer to a new layout.
    pub fn set_values(&mut self, values: impl Into<Vec<i64>>) {
        self.tree.rebuild(values);
        edebug!(len = self.tree.len(), "Explorer::set_values");
        self.result = None;
        self.error = None;
        self.show_highlight = false;
    }

    /// Parses `input` with [`parse_values`] and applies it.
    ///
    /// Returns `false` (keeping the current array) when nothing in `input` parses.
    pub fn set_values_from_input(&mut self, input: &str) -> bool {
        let Some(values) = parse_values(input) else {
            etrace!("set_values_from_input: nothing to parse");
            return false;
        };
        self.set_values(values);
        true
    }

    pub fn set_query_range(&mut self, start: i64, end: i64) {
        self.query_range = (start, end);
    }

    pub fn set_pending_update(&mut self, index: i64, value: i64) {
        self.update_index = index;
        self.update_value = value;
    }

    /// Sums `[start, end]` without touching session state.
    ///
    /// Negative bounds fail with [`Error::InvalidRange`], like any other out-of-range input.
    pub fn query(&self, start: i64, end: i64) -> Result<i64, Error> {
        let (Some(s), Some(e)) = (to_index(start), to_index(end)) else {
            return Err(Error::InvalidRange {
                start,
                end,
                len: self.tree.len(),
            });
        };
        self.tree.query_sum(s, e)
    }

    /// Runs the pending query.
    ///
    /// On success the result is stored, the highlight switches to the queried range and is
    /// shown. On failure the result is cleared and the error is stored.
    pub fn run_query(&mut self) -> Result<i64, Error> {
        let (start, end) = self.query_range;
        match self.query(start, end) {
            Ok(sum) => {
                etrace!(start, end, sum, "Explorer::run_query");
                self.result = Some(sum);
                self.error = None;
                self.shown_range = self.query_range;
                self.show_highlight = true;
                Ok(sum)
            }
            Err(err) => {
                ewarn!(start, end, len = self.tree.len(), "Explorer::run_query failed");
                self.result = None;
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Applies the pending update to the tree in place (`O(log n)`, no rebuild).
    ///
    /// Clears the last result and hides the highlight on success. A negative or too-large index
    /// fails with [`Error::IndexOutOfRange`], which is also stored as the session error.
    pub fn apply_update(&mut self) -> Result<(), Error> {
        let (index, value) = (self.update_index, self.update_value);
        let applied = match to_index(index) {
            Some(i) => self.tree.update(i, value),
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.tree.len(),
            }),
        };
        match applied {
            Ok(()) => {
                etrace!(index, value, "Explorer::apply_update");
                self.result = None;
                self.error = None;
                self.show_highlight = false;
                Ok(())
            }
            Err(err) => {
                ewarn!(index, len = self.tree.len(), "Explorer::apply_update failed");
                self.error = Some(err);
                Err(err)
            }
        }
    }

    pub fn snapshot(&self) -> TreeView {
        self.tree.snapshot()
    }

    /// The highlight for the shown range, if it is visible and the range is valid for the
    /// current array.
    pub fn highlight(&self) -> Option<QueryHighlight> {
        if !self.show_highlight {
            return None;
        }
        let (start, end) = self.shown_range;
        let (start, end) = (to_index(start)?, to_index(end)?);
        self.tree.check_range(start, end).ok()?;
        Some(QueryHighlight::new(&self.tree, start, end))
    }

    pub fn cell_marks(&self) -> Vec<CellMark> {
        cell_marks(self.tree.len(), self.query_range, self.update_index)
    }

    /// Plain-text outline of the tree with the current highlight applied.
    pub fn outline(&self) -> String {
        render_outline(&self.snapshot(), self.highlight().as_ref())
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(ExplorerOptions::default())
    }
}

fn to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
