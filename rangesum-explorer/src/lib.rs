//! Session and highlight helpers for visualizing the `rangesum` segment tree.
//!
//! The `rangesum` crate owns the data structure and its read-only views. This crate adds the
//! small, framework-neutral pieces a visual front end keeps repeating:
//!
//! - Classifying nodes as idle/touched/used for a query (color-coding)
//! - Marking source array cells for the pending query and update
//! - Parsing user-typed arrays
//! - A session controller that keeps the tree, pending inputs and last result together
//!
//! This crate is intentionally framework-agnostic (no GUI/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod explorer;
mod highlight;
mod input;
mod marks;
mod options;
mod outline;


pub use explorer::Explorer;
pub use highlight::{NodeRole, QueryHighlight};
pub use input::parse_values;
pub use marks::{CellMark, cell_marks};
pub use options::ExplorerOptions;
pub use outline::render_outline;
