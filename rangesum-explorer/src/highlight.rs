use alloc::vec::Vec;

use rangesum::{NodeId, RangeSumTree, Span};

/// How a node takes part in a query, for color-coding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeRole {
    /// Not visited by the query.
    #[default]
    Idle,
    /// Visited, but its sum is not part of the answer.
    Touched,
    /// Fully covered: its sum is added to the answer.
    Used,
}

/// The touched path and used set of one query, captured for rendering.
///
/// Both sets are `O(log n)` long, so lookups scan them directly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryHighlight {
    pub range: Span,
    /// Pre-order list of every node the query visits.
    pub path: Vec<NodeId>,
    /// Fully covered nodes, left to right.
    pub used: Vec<NodeId>,
}

impl QueryHighlight {
    /// Captures the highlight for `[start, end]`. Both sets are empty when the range is invalid.
    pub fn new(tree: &RangeSumTree, start: usize, end: usize) -> Self {
        let path = tree.query_path(start, end);
        let used = tree.used_nodes(start, end);
        etrace!(
            start,
            end,
            path = path.len(),
            used = used.len(),
            "QueryHighlight::new"
        );
        Self {
            range: Span::new(start, end),
            path,
            used,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn role(&self, id: NodeId) -> NodeRole {
        if self.used.contains(&id) {
            NodeRole::Used
        } else if self.path.contains(&id) {
            NodeRole::Touched
        } else {
            NodeRole::Idle
        }
    }

    /// An edge is highlighted when both of its endpoints are on the touched path.
    pub fn is_link_highlighted(&self, parent: NodeId, child: NodeId) -> bool {
        self.path.contains(&parent) && self.path.contains(&child)
    }
}
