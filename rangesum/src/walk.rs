use crate::types::{NodeId, Overlap, Span};

/// Range decomposition shared by every query-shaped operation.
///
/// Starting at the root, each visited node is reported with its span and how it overlaps
/// `query`. Only `Partial` nodes are descended into, so `Covered` nodes are the leaves of the
/// decomposition and `Disjoint` nodes end their branch.
pub(crate) fn decompose(root: Span, query: Span, visit: &mut impl FnMut(NodeId, Span, Overlap)) {
    visit_node(NodeId::ROOT, root, query, visit);
}

fn visit_node(
    node: NodeId,
    span: Span,
    query: Span,
    visit: &mut impl FnMut(NodeId, Span, Overlap),
) {
    let overlap = span.overlap(query);
    visit(node, span, overlap);
    if overlap != Overlap::Partial {
        return;
    }

    // A single index is either inside the query or not.
    debug_assert!(!span.is_leaf(), "partial overlap on leaf {span}");
    let (left, right) = span.split();
    visit_node(node.left(), left, query, visit);
    visit_node(node.right(), right, query, visit);
}
