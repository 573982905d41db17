use alloc::vec;
use alloc::vec::Vec;

use crate::types::Overlap;
use crate::walk::decompose;
use crate::{Error, NodeId, NodeView, Span, TreeView};

/// A segment tree over a fixed-length array of `i64`, answering range sums.
///
/// Nodes live in a flat arena using implicit 1-based indexing: the root is slot `1` and node `i`
/// has children `2i` and `2i + 1`. The arena holds `4n` slots (one slot for an empty array),
/// which is enough for the midpoint split used here.
///
/// Sums use wrapping `i64` addition, so every aggregate stays consistent with its children even
/// when intermediate totals overflow.
///
/// The tree also keeps the logical array, so updates overwrite a value instead of applying a
/// delta. Changing the array length requires [`RangeSumTree::rebuild`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSumTree {
    values: Vec<i64>,
    nodes: Vec<i64>, // 1-indexed, slot 0 unused
}

impl RangeSumTree {
    /// Builds a tree over `values` in `O(n)`.
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        let values = values.into();
        let nodes = vec![0; slots_for(values.len())];
        let mut tree = Self { values, nodes };
        if let Some(root) = tree.root_span() {
            tree.build_node(NodeId::ROOT, root);
        }
        rdebug!(
            len = tree.len(),
            capacity = tree.capacity(),
            "RangeSumTree::new"
        );
        tree
    }

    /// Replaces the whole array, rebuilding the layout for the new length.
    pub fn rebuild(&mut self, values: impl Into<Vec<i64>>) {
        *self = Self::new(values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Sum of the whole array (`0` when empty).
    pub fn total(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.nodes[NodeId::ROOT.index()]
        }
    }

    /// Number of arena slots, including unused ones.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Number of levels from the root down to the deepest leaf (`0` when empty).
    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.len().next_power_of_two().trailing_zeros() + 1
        }
    }

    fn root_span(&self) -> Option<Span> {
        if self.is_empty() {
            None
        } else {
            Some(Span::new(0, self.len() - 1))
        }
    }

    fn pull(&mut self, node: NodeId) {
        self.nodes[node.index()] =
            self.nodes[node.left().index()].wrapping_add(self.nodes[node.right().index()]);
    }

    fn build_node(&mut self, node: NodeId, span: Span) {
        if span.is_leaf() {
            self.nodes[node.index()] = self.values[span.start];
            return;
        }
        let (left, right) = span.split();
        self.build_node(node.left(), left);
        self.build_node(node.right(), right);
        self.pull(node);
    }

    /// Sets `values[index] = value` and recomputes the root-to-leaf path in `O(log n)`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] without touching the tree when `index >= len`.
    pub fn update(&mut self, index: usize, value: i64) -> Result<(), Error> {
        let len = self.len();
        let Some(root) = self.root_span().filter(|root| root.contains(index)) else {
            rwarn!(index, len, "update: index out of range");
            return Err(Error::index_out_of_range(index, len));
        };
        rtrace!(index, value, "update");
        self.values[index] = value;
        self.update_node(NodeId::ROOT, root, index, value);
        Ok(())
    }

    fn update_node(&mut self, node: NodeId, span: Span, index: usize, value: i64) {
        if span.is_leaf() {
            self.nodes[node.index()] = value;
            return;
        }
        let (left, right) = span.split();
        if index <= left.end {
            self.update_node(node.left(), left, index, value);
        } else {
            self.update_node(node.right(), right, index, value);
        }
        self.pull(node);
    }

    /// Validates an inclusive query range `[start, end]`.
    ///
    /// Every range is invalid on an empty tree.
    pub fn check_range(&self, start: usize, end: usize) -> Result<Span, Error> {
        if start > end || end >= self.len() {
            return Err(Error::invalid_range(start, end, self.len()));
        }
        Ok(Span::new(start, end))
    }

    fn walk_query(
        &self,
        start: usize,
        end: usize,
        mut visit: impl FnMut(NodeId, Span, Overlap),
    ) -> Result<(), Error> {
        let query = self.check_range(start, end)?;
        let root = Span::new(0, self.len() - 1);
        decompose(root, query, &mut visit);
        Ok(())
    }

    /// Sum of `values[start..=end]`, aggregated through the tree in `O(log n)`.
    ///
    /// Fails with [`Error::InvalidRange`] when `start > end` or `end >= len`.
    pub fn query_sum(&self, start: usize, end: usize) -> Result<i64, Error> {
        let mut sum = 0i64;
        let walked = self.walk_query(start, end, |node, _, overlap| {
            if overlap == Overlap::Covered {
                sum = sum.wrapping_add(self.nodes[node.index()]);
            }
        });
        if walked.is_err() {
            rwarn!(start, end, len = self.len(), "query_sum: invalid range");
        }
        walked?;
        rtrace!(start, end, sum, "query_sum");
        Ok(sum)
    }

    /// Calls `f` for every node the query traversal of `[start, end]` visits, in pre-order.
    ///
    /// This includes partially overlapping nodes that are recursed past and the fully covered
    /// nodes where recursion stops. Disjoint nodes are skipped. Does nothing on an invalid range.
    pub fn for_each_query_node(&self, start: usize, end: usize, mut f: impl FnMut(NodeId, Span)) {
        let walked = self.walk_query(start, end, |node, span, overlap| {
            if overlap != Overlap::Disjoint {
                f(node, span);
            }
        });
        if walked.is_err() {
            rtrace!(start, end, "for_each_query_node: invalid range");
        }
    }

    /// Calls `f` for every node whose stored sum contributes to `query_sum(start, end)`, left to
    /// right. Does nothing on an invalid range.
    pub fn for_each_used_node(&self, start: usize, end: usize, mut f: impl FnMut(NodeId, Span)) {
        let walked = self.walk_query(start, end, |node, span, overlap| {
            if overlap == Overlap::Covered {
                f(node, span);
            }
        });
        if walked.is_err() {
            rtrace!(start, end, "for_each_used_node: invalid range");
        }
    }

    /// Every node touched by the query traversal of `[start, end]` (see
    /// [`RangeSumTree::for_each_query_node`]). Empty on an invalid range.
    pub fn query_path(&self, start: usize, end: usize) -> Vec<NodeId> {
        let mut path = Vec::new();
        self.for_each_query_node(start, end, |node, _| path.push(node));
        path
    }

    /// The fully covered nodes whose sums make up `query_sum(start, end)`. Always a subset of
    /// [`RangeSumTree::query_path`]. Empty on an invalid range.
    pub fn used_nodes(&self, start: usize, end: usize) -> Vec<NodeId> {
        let mut used = Vec::new();
        self.for_each_used_node(start, end, |node, _| used.push(node));
        used
    }

    /// Resolves the span covered by `id`, or `None` if `id` is not a node of this tree.
    pub fn node_span(&self, id: NodeId) -> Option<Span> {
        let mut span = self.root_span()?;
        for right in id.steps()? {
            if span.is_leaf() {
                return None;
            }
            let (left, right_span) = span.split();
            span = if right { right_span } else { left };
        }
        Some(span)
    }

    /// The stored aggregate of `id`, or `None` if `id` is not a node of this tree.
    pub fn node_value(&self, id: NodeId) -> Option<i64> {
        self.node_span(id)?;
        Some(self.nodes[id.index()])
    }

    /// A detached, tree-shaped copy of every node for rendering.
    pub fn snapshot(&self) -> TreeView {
        TreeView {
            len: self.len(),
            root: self
                .root_span()
                .map(|root| self.view_node(NodeId::ROOT, root)),
        }
    }

    fn view_node(&self, node: NodeId, span: Span) -> NodeView {
        let children = if span.is_leaf() {
            Vec::new()
        } else {
            let (left, right) = span.split();
            vec![
                self.view_node(node.left(), left),
                self.view_node(node.right(), right),
            ]
        };
        NodeView {
            id: node,
            span,
            value: self.nodes[node.index()],
            children,
        }
    }
}

impl Default for RangeSumTree {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<i64>> for RangeSumTree {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl From<&[i64]> for RangeSumTree {
    fn from(values: &[i64]) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i64> for RangeSumTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

fn slots_for(len: usize) -> usize {
    if len == 0 { 1 } else { len.saturating_mul(4) }
}
