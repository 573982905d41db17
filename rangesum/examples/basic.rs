use rangesum::RangeSumTree;

fn main() {
    let mut tree = RangeSumTree::new(vec![1, 3, 5, 7, 9, 11]);
    println!("sum[1..=4]={:?}", tree.query_sum(1, 4));
    println!("touched={:?}", tree.query_path(1, 4));
    println!("used={:?}", tree.used_nodes(1, 4));

    tree.update(2, 100).expect("index 2 is in range");
    println!("after update: sum[1..=4]={:?}", tree.query_sum(1, 4));
    println!("out of range: {:?}", tree.query_sum(0, 6));
}
