// Example: walk a snapshot the way a renderer would.
use rangesum::RangeSumTree;

fn main() {
    let tree: RangeSumTree = (1..=10).collect();
    let view = tree.snapshot();

    view.for_each_node(|node, depth| {
        println!(
            "{:indent$}{} {} (node {})",
            "",
            node.label(),
            node.span,
            node.id,
            indent = depth * 2
        );
    });

    let mut edges = 0;
    view.for_each_link(|_, _| edges += 1);
    println!("nodes={} edges={edges}", view.node_count());
}
