use crate::*;

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_value(&mut self) -> i64 {
        (self.next_u64() % 2001) as i64 - 1000
    }
}

fn expected_sum(values: &[i64], start: usize, end: usize) -> i64 {
    values[start..=end]
        .iter()
        .fold(0i64, |acc, &v| acc.wrapping_add(v))
}

fn ids(raw: &[usize]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::new).collect()
}

/// Checks aggregation, leaf correctness and leaf coverage over every reachable node.
fn assert_invariants(tree: &RangeSumTree) {
    let mut covered = vec![0usize; tree.len()];
    for raw in 1..tree.capacity() {
        let id = NodeId::new(raw);
        let Some(span) = tree.node_span(id) else {
            continue;
        };
        let value = tree.node_value(id).unwrap();
        if span.is_leaf() {
            assert_eq!(value, tree.values()[span.start], "leaf {id} {span}");
            covered[span.start] += 1;
        } else {
            let left = tree.node_value(id.left()).unwrap();
            let right = tree.node_value(id.right()).unwrap();
            assert_eq!(value, left.wrapping_add(right), "node {id} {span}");
        }
    }
    assert!(covered.iter().all(|&c| c == 1), "leaf coverage {covered:?}");
}

fn sample() -> RangeSumTree {
    RangeSumTree::new(vec![1, 3, 5, 7, 9, 11])
}

#[test]
fn sample_query_and_update() {
    let mut t = sample();
    assert_eq!(t.query_sum(1, 4), Ok(24));

    t.update(2, 100).unwrap();
    assert_eq!(t.query_sum(1, 4), Ok(119));
    assert_eq!(t.query_sum(0, 1), Ok(4));
    assert_eq!(t.values(), &[1, 3, 100, 7, 9, 11]);
    assert_invariants(&t);
}

#[test]
fn full_range_equals_total() {
    let t = sample();
    assert_eq!(t.total(), 36);
    assert_eq!(t.query_sum(0, 5), Ok(36));
}

#[test]
fn update_at_last_index_is_visible() {
    let mut t = sample();
    t.update(5, -4).unwrap();
    assert_eq!(t.query_sum(5, 5), Ok(-4));
    assert_eq!(t.get(5), Some(-4));
    assert_eq!(t.total(), 21);
}

#[test]
fn out_of_range_update_is_rejected_without_mutation() {
    let mut t = sample();
    let before = t.clone();
    assert_eq!(
        t.update(6, 1),
        Err(Error::IndexOutOfRange { index: 6, len: 6 })
    );
    assert_eq!(
        t.update(usize::MAX, 1),
        Err(Error::IndexOutOfRange { index: -1, len: 6 })
    );
    assert_eq!(t, before);
}

#[test]
fn invalid_query_ranges_are_rejected() {
    let t = sample();
    assert_eq!(
        t.query_sum(0, 6),
        Err(Error::InvalidRange {
            start: 0,
            end: 6,
            len: 6
        })
    );
    assert_eq!(
        t.query_sum(3, 1),
        Err(Error::InvalidRange {
            start: 3,
            end: 1,
            len: 6
        })
    );
    assert!(t.check_range(0, 5).is_ok());
}

#[test]
fn error_messages_name_the_inputs() {
    let t = sample();
    let err = t.query_sum(3, 1).unwrap_err();
    assert_eq!(err.to_string(), "invalid range [3, 1] for 6 elements");

    let mut t = t;
    let err = t.update(9, 0).unwrap_err();
    assert_eq!(err.to_string(), "index 9 is out of range for 6 elements");
}

#[test]
fn sample_query_path_and_used_nodes() {
    let t = sample();
    // [0,5] -> [0,2] -> [0,1] -> [1,1]*, [2,2]*; [3,5] -> [3,4]*
    assert_eq!(t.query_path(1, 4), ids(&[1, 2, 4, 9, 5, 3, 6]));
    assert_eq!(t.used_nodes(1, 4), ids(&[9, 5, 6]));

    let used_sum: i64 = t
        .used_nodes(1, 4)
        .into_iter()
        .map(|id| t.node_value(id).unwrap())
        .sum();
    assert_eq!(used_sum, 24);
}

#[test]
fn query_path_stops_at_fully_covered_node() {
    let t = sample();
    assert_eq!(t.query_path(0, 5), ids(&[1]));
    assert_eq!(t.used_nodes(0, 5), ids(&[1]));

    assert_eq!(t.query_path(3, 5), ids(&[1, 3]));
    assert_eq!(t.used_nodes(3, 5), ids(&[3]));
}

#[test]
fn introspection_views_are_empty_on_invalid_range() {
    let t = sample();
    assert!(t.query_path(2, 1).is_empty());
    assert!(t.used_nodes(0, 6).is_empty());

    let mut calls = 0;
    t.for_each_query_node(4, 9, |_, _| calls += 1);
    t.for_each_used_node(4, 9, |_, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn for_each_used_node_reports_spans_left_to_right() {
    let t = sample();
    let mut spans = Vec::new();
    t.for_each_used_node(1, 4, |_, span| spans.push(span));
    assert_eq!(
        spans,
        vec![Span::single(1), Span::single(2), Span::new(3, 4)]
    );
}

#[test]
fn empty_tree_rejects_everything() {
    let mut t = RangeSumTree::new(Vec::new());
    assert!(t.is_empty());
    assert_eq!(t.capacity(), 1);
    assert_eq!(t.height(), 0);
    assert_eq!(t.total(), 0);
    assert_eq!(
        t.update(0, 1),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        t.query_sum(0, 0),
        Err(Error::InvalidRange {
            start: 0,
            end: 0,
            len: 0
        })
    );
    assert!(t.query_path(0, 0).is_empty());
    assert!(t.used_nodes(0, 0).is_empty());
    assert_eq!(t.node_span(NodeId::ROOT), None);

    let view = t.snapshot();
    assert!(view.is_empty());
    assert_eq!(view.node_count(), 0);
    assert_eq!(RangeSumTree::default(), t);
}

#[test]
fn single_element_tree() {
    let mut t = RangeSumTree::new(vec![42]);
    assert_eq!(t.capacity(), 4);
    assert_eq!(t.height(), 1);
    assert_eq!(t.query_sum(0, 0), Ok(42));
    assert_eq!(t.query_path(0, 0), ids(&[1]));
    t.update(0, 7).unwrap();
    assert_eq!(t.total(), 7);
    assert_eq!(t.node_span(NodeId::new(2)), None);
}

#[test]
fn capacity_and_height_follow_length() {
    let t = sample();
    assert_eq!(t.capacity(), 24);
    assert_eq!(t.height(), 4);
    assert_eq!(RangeSumTree::new(vec![0; 8]).height(), 4);
    assert_eq!(RangeSumTree::new(vec![0; 9]).height(), 5);
}

#[test]
fn node_span_resolves_reachable_ids_only() {
    let t = sample();
    assert_eq!(t.node_span(NodeId::ROOT), Some(Span::new(0, 5)));
    assert_eq!(t.node_span(NodeId::new(3)), Some(Span::new(3, 5)));
    assert_eq!(t.node_span(NodeId::new(12)), Some(Span::single(3)));
    // Node 5 is the leaf [2, 2], so it has no children.
    assert_eq!(t.node_span(NodeId::new(10)), None);
    assert_eq!(t.node_span(NodeId::new(0)), None);
    assert_eq!(t.node_value(NodeId::new(10)), None);
    assert_eq!(t.node_value(NodeId::new(6)), Some(16));
}

#[test]
fn snapshot_mirrors_layout() {
    let t = sample();
    let view = t.snapshot();
    assert_eq!(view.len, 6);
    assert_eq!(view.node_count(), 11);

    let root = view.root.as_ref().unwrap();
    assert_eq!(root.id, NodeId::ROOT);
    assert_eq!(root.label(), "Sum: 36");
    assert_eq!(root.span.to_string(), "[0, 5]");
    assert_eq!(root.left().unwrap().span, Span::new(0, 2));
    assert_eq!(root.right().unwrap().value, 27);

    let leaf = view.find(NodeId::new(9)).unwrap();
    assert!(leaf.is_leaf());
    assert_eq!(leaf.label(), "[1] = 3");
    assert!(view.find(NodeId::new(10)).is_none());

    let mut links = 0;
    view.for_each_link(|parent, child| {
        assert_eq!(child.id.parent(), Some(parent.id));
        links += 1;
    });
    assert_eq!(links, view.node_count() - 1);

    let mut order = Vec::new();
    view.for_each_node(|node, depth| {
        assert_eq!(node.id.depth(), Some(depth as u32));
        order.push(node.id.index());
    });
    assert_eq!(order, vec![1, 2, 4, 8, 9, 5, 3, 6, 12, 13, 7]);
}

#[test]
fn snapshot_is_detached_from_later_updates() {
    let mut t = sample();
    let before = t.snapshot();
    t.update(0, 50).unwrap();
    assert_eq!(before.root.as_ref().unwrap().value, 36);
    assert_eq!(t.snapshot().root.unwrap().value, 85);
}

#[test]
fn update_only_touches_root_to_leaf_path() {
    let mut t = sample();
    let before: Vec<Option<i64>> = (0..t.capacity())
        .map(|raw| t.node_value(NodeId::new(raw)))
        .collect();

    t.update(4, 0).unwrap();

    for raw in 0..t.capacity() {
        let id = NodeId::new(raw);
        let on_path = t.node_span(id).is_some_and(|span| span.contains(4));
        let after = t.node_value(id);
        if on_path {
            assert_eq!(after, before[raw].map(|v| v - 9), "node {id}");
        } else {
            assert_eq!(after, before[raw], "node {id}");
        }
    }
}

#[test]
fn rebuild_changes_length() {
    let mut t = sample();
    t.rebuild(vec![2, 2]);
    assert_eq!(t.len(), 2);
    assert_eq!(t.capacity(), 8);
    assert_eq!(t.query_sum(0, 1), Ok(4));
    assert!(t.query_sum(0, 2).is_err());
    assert_invariants(&t);
}

#[test]
fn conversions_build_the_same_tree() {
    let values = [4i64, -2, 9];
    let a = RangeSumTree::from(&values[..]);
    let b: RangeSumTree = values.iter().copied().collect();
    let c = RangeSumTree::from(values.to_vec());
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.total(), 11);
}

#[test]
fn sums_wrap_on_overflow() {
    let values = vec![i64::MAX, 1, -1, i64::MIN];
    let t = RangeSumTree::new(values.clone());
    assert_eq!(t.query_sum(0, 1), Ok(i64::MIN));
    assert_eq!(t.query_sum(0, 2), Ok(i64::MAX));
    assert_eq!(t.total(), expected_sum(&values, 0, 3));
    assert_invariants(&t);
}

#[test]
fn randomized_queries_match_direct_summation() {
    for seed in 0..64u64 {
        let mut rng = Lcg::new(seed);
        let n = rng.gen_range_usize(1, 80);
        let mut values: Vec<i64> = (0..n).map(|_| rng.gen_value()).collect();
        let mut t = RangeSumTree::new(values.clone());
        assert_invariants(&t);

        for _ in 0..40 {
            if rng.next_u64() % 3 == 0 {
                let i = rng.gen_range_usize(0, n);
                let v = rng.gen_value();
                values[i] = v;
                t.update(i, v).unwrap();
            }

            let a = rng.gen_range_usize(0, n);
            let b = rng.gen_range_usize(0, n);
            let (l, r) = (a.min(b), a.max(b));

            let sum = t.query_sum(l, r).unwrap();
            assert_eq!(sum, expected_sum(&values, l, r), "seed={seed} [{l}, {r}]");
            assert_eq!(t.query_sum(l, r), Ok(sum));

            let path = t.query_path(l, r);
            let used = t.used_nodes(l, r);
            assert!(used.iter().all(|id| path.contains(id)));
            let used_sum = used
                .iter()
                .fold(0i64, |acc, &id| acc.wrapping_add(t.node_value(id).unwrap()));
            assert_eq!(used_sum, sum);

            // Used spans partition the query range, left to right.
            let mut next = l;
            t.for_each_used_node(l, r, |_, span| {
                assert_eq!(span.start, next);
                next = span.end + 1;
            });
            assert_eq!(next, r + 1);
        }

        for i in 0..n {
            assert_eq!(t.query_sum(i, i), Ok(values[i]));
        }
        assert_eq!(t.values(), &values[..]);
        assert_invariants(&t);
    }
}

#[test]
fn randomized_update_locality() {
    for seed in 100..132u64 {
        let mut rng = Lcg::new(seed);
        let n = rng.gen_range_usize(1, 40);
        let values: Vec<i64> = (0..n).map(|_| rng.gen_value()).collect();
        let mut t = RangeSumTree::new(values.clone());

        let i = rng.gen_range_usize(0, n);
        let v = values[i] + 1 + (rng.next_u64() % 50) as i64;

        let mut before = Vec::new();
        for l in 0..n {
            for r in l..n {
                before.push(t.query_sum(l, r).unwrap());
            }
        }

        t.update(i, v).unwrap();

        let mut k = 0;
        for l in 0..n {
            for r in l..n {
                let after = t.query_sum(l, r).unwrap();
                if l <= i && i <= r {
                    assert_ne!(after, before[k], "seed={seed} [{l}, {r}] i={i}");
                } else {
                    assert_eq!(after, before[k], "seed={seed} [{l}, {r}] i={i}");
                }
                k += 1;
            }
        }
    }
}
