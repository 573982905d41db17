//! A segment tree for point updates and inclusive range sums over `i64` values.
//!
//! For session state and highlight helpers aimed at visual front ends, see the
//! `rangesum-explorer` crate.
//!
//! Besides `update` and `query_sum`, the tree exposes read-only views for visualization and
//! debugging consumers:
//! - [`RangeSumTree::snapshot`]: every node with its span, aggregate and children
//! - [`RangeSumTree::query_path`]: every node a query traversal touches
//! - [`RangeSumTree::used_nodes`]: the nodes whose sums make up the answer
//!
//! Node identities ([`NodeId`]) are slots in an implicit 1-based layout (root `1`, children
//! `2i`/`2i + 1`), so they compare and hash cheaply and can be used as render keys.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod tree;
mod types;
mod walk;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use tree::RangeSumTree;
pub use types::{NodeId, NodeView, Span, TreeView};
