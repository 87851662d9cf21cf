//! Builds a tree from random values, unbalances it and rebalances it again, printing the tree
//! at every step.
//!
//! ```text
//! RUST_LOG=debug cargo run --example driver -- [count] [max]
//! ```

use std::env;
use std::error::Error;

use ordered_tree::{Order, Tree};
use rand::Rng;

const DEFAULT_COUNT: usize = 10;
const DEFAULT_MAX: u32 = 100;

fn collect_values(tree: &Tree<u32>, order: Order) -> Result<Vec<u32>, ordered_tree::Error> {
    let mut values = Vec::new();
    tree.traverse(order, Some(&mut |value: &u32| values.push(*value)))?;
    Ok(values)
}

fn print_traversals(label: &str, tree: &Tree<u32>) -> Result<(), ordered_tree::Error> {
    for order in Order::ALL {
        println!("{label} ({order}): {:?}", collect_values(tree, order)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let count = args.next().map_or(Ok(DEFAULT_COUNT), |arg| arg.parse())?;
    let max = args.next().map_or(Ok(DEFAULT_MAX), |arg| arg.parse())?;

    let mut rng = rand::thread_rng();
    let values: Vec<u32> = (0..count).map(|_| rng.gen_range(0..max.max(1))).collect();
    log::info!("Generated {} values below {}", values.len(), max);

    let mut tree = Tree::from_values(values);

    println!("=== INITIAL TREE ===");
    print!("{tree}");
    print_traversals("Tree", &tree)?;
    println!("Is the tree balanced? {}", tree.is_balanced());

    println!("\n=== AFTER INSERTING VALUES ===");
    println!("Inserting additional values to unbalance the tree...");
    for value in 101..=105 {
        tree.insert(value);
    }
    print!("{tree}");
    println!(
        "Is the tree balanced after insertions? {}",
        tree.is_balanced()
    );

    println!("\n=== AFTER REBALANCING ===");
    println!("Rebalancing the tree...");
    tree.rebalance();
    print!("{tree}");
    println!(
        "Is the tree balanced after rebalancing? {}",
        tree.is_balanced()
    );
    print_traversals("Rebalanced tree", &tree)?;

    Ok(())
}
