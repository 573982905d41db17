// Example: drive an explorer session the way a UI adapter would.
use rangesum_explorer::{Explorer, ExplorerOptions};

fn main() {
    let mut e = Explorer::new(ExplorerOptions::default());
    println!("values={:?}", e.values());
    println!("marks={:?}", e.cell_marks());

    match e.run_query() {
        Ok(sum) => println!("sum{:?}={sum}", e.query_range()),
        Err(err) => println!("error: {err}"),
    }
    print!("{}", e.outline());

    e.set_pending_update(2, 100);
    if let Err(err) = e.apply_update() {
        println!("error: {err}");
    }
    println!("after update: {:?}", e.run_query());

    e.set_query_range(-1, 0);
    println!("negative start: {:?}", e.run_query());

    if e.set_values_from_input("4 8 15 16 23 42") {
        e.set_query_range(0, 5);
        println!("new values sum={:?}", e.run_query());
    }
}
