use alloc::string::String;
use core::fmt::Write;

use rangesum::TreeView;

use crate::{NodeRole, QueryHighlight};

/// Renders a snapshot as an indented plain-text outline, one node per line in pre-order.
///
/// Each line reads `{label} {span} #{id}`. With a highlight, used nodes end in ` *` and nodes
/// that were only touched end in ` +`.
pub fn render_outline(view: &TreeView, highlight: Option<&QueryHighlight>) -> String {
    let mut out = String::new();
    view.for_each_node(|node, depth| {
        let marker = match highlight.map_or(NodeRole::Idle, |h| h.role(node.id)) {
            NodeRole::Used => " *",
            NodeRole::Touched => " +",
            NodeRole::Idle => "",
        };
        // Writing into a `String` cannot fail.
        let _ = writeln!(
            out,
            "{:indent$}{} {} #{}{}",
            "",
            node.label(),
            node.span,
            node.id,
            marker,
            indent = depth * 2
        );
    });
    out
}
