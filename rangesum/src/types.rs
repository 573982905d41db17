use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Identity of a tree node: its slot in the implicit 1-based layout.
///
/// The root is `NodeId(1)` and node `i` has children `2i` and `2i + 1`. Identities are
/// positional: they are stable for the lifetime of a tree, but a rebuilt tree reuses them for
/// whatever ranges the new layout assigns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: Self = Self(1);

    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn left(self) -> Self {
        Self(self.0 * 2)
    }

    pub const fn right(self) -> Self {
        Self(self.0 * 2 + 1)
    }

    pub const fn parent(self) -> Option<Self> {
        if self.0 <= 1 {
            None
        } else {
            Some(Self(self.0 / 2))
        }
    }

    /// Distance from the root (`0` for the root). `None` for the unused slot `0`.
    pub const fn depth(self) -> Option<u32> {
        self.0.checked_ilog2()
    }

    /// Root-to-node turns encoded by the id bits below the leading one (`true` = right child).
    pub(crate) fn steps(self) -> Option<impl Iterator<Item = bool>> {
        let depth = self.depth()?;
        let raw = self.0;
        Some((0..depth).rev().map(move |bit| (raw >> bit) & 1 == 1))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contiguous range of array indexes. Both ends are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize, // inclusive
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub const fn is_leaf(&self) -> bool {
        self.start == self.end
    }

    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// `floor((start + end) / 2)` without overflowing near `usize::MAX`.
    pub const fn mid(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }

    /// Splits into `[start, mid]` and `[mid + 1, end]`.
    pub const fn split(&self) -> (Self, Self) {
        let mid = self.mid();
        (Self::new(self.start, mid), Self::new(mid + 1, self.end))
    }

    pub(crate) const fn overlap(&self, query: Span) -> Overlap {
        if self.start > query.end || self.end < query.start {
            Overlap::Disjoint
        } else if query.start <= self.start && self.end <= query.end {
            Overlap::Covered
        } else {
            Overlap::Partial
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// How a node's span relates to a query span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Overlap {
    Disjoint,
    Covered,
    Partial,
}

/// One node of a [`TreeView`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeView {
    pub id: NodeId,
    pub span: Span,
    /// Aggregate (sum) over `span`.
    pub value: i64,
    /// Empty for leaves, `[left, right]` otherwise.
    pub children: Vec<NodeView>,
}

impl NodeView {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn left(&self) -> Option<&NodeView> {
        self.children.first()
    }

    pub fn right(&self) -> Option<&NodeView> {
        self.children.get(1)
    }

    /// Display name for a node: `[i] = v` for leaves, `Sum: v` for internal nodes.
    pub fn label(&self) -> String {
        if self.span.is_leaf() {
            format!("[{}] = {}", self.span.start, self.value)
        } else {
            format!("Sum: {}", self.value)
        }
    }

    fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    fn visit<'a>(&'a self, depth: usize, f: &mut impl FnMut(&'a NodeView, usize)) {
        f(self, depth);
        for child in &self.children {
            child.visit(depth + 1, f);
        }
    }

    fn visit_links<'a>(&'a self, f: &mut impl FnMut(&'a NodeView, &'a NodeView)) {
        for child in &self.children {
            f(self, child);
            child.visit_links(f);
        }
    }
}

/// A tree-shaped projection of a [`crate::RangeSumTree`] for external rendering.
///
/// This is a detached copy: it does not follow later updates to the tree it was taken from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeView {
    /// Number of array elements the tree was built over.
    pub len: usize,
    /// `None` only for a tree over an empty array.
    pub root: Option<NodeView>,
}

impl TreeView {
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, NodeView::node_count)
    }

    /// Finds a node by id, following the id bits from the root (`O(height)`).
    pub fn find(&self, id: NodeId) -> Option<&NodeView> {
        let mut node = self.root.as_ref()?;
        for right in id.steps()? {
            node = if right { node.right()? } else { node.left()? };
        }
        Some(node)
    }

    /// Visits every node in pre-order together with its depth (root is depth `0`).
    pub fn for_each_node<'a>(&'a self, mut f: impl FnMut(&'a NodeView, usize)) {
        if let Some(root) = &self.root {
            root.visit(0, &mut f);
        }
    }

    /// Visits every parent/child edge in pre-order.
    pub fn for_each_link<'a>(&'a self, mut f: impl FnMut(&'a NodeView, &'a NodeView)) {
        if let Some(root) = &self.root {
            root.visit_links(&mut f);
        }
    }
}
