//! Builds a tree from random values and walks through what it can do: printing, traversing,
//! unbalancing it with a few inserts and then rebalancing it.
//!
//! Run with: cargo run --bin driver -- --count 10 --seed 7

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rebuild_bst::Tree;

#[derive(Parser)]
#[command(name = "driver")]
#[command(about = "Build, print, unbalance and rebalance a random binary search tree")]
struct Cli {
    /// Generate `count + 1` random values in `0..count`
    #[arg(long, short, default_value = "10")]
    count: u32,

    /// Seed for the random values. A fresh seed is used when omitted
    #[arg(long, short)]
    seed: Option<u64>,

    /// Values inserted to knock the tree out of balance
    #[arg(long, num_args = 1.., default_values_t = [100, 200, 300])]
    extra: Vec<u32>,
}

fn random_values(count: u32, rng: &mut impl Rng) -> anyhow::Result<Vec<u32>> {
    anyhow::ensure!(count > 0, "--count must be at least 1");
    Ok((0..=count).map(|_| rng.random_range(0..count)).collect())
}

fn print_tree(tree: &Tree<u32>) {
    println!("Tree:");
    print!("{tree}");
    println!("Balanced: {}", tree.is_balanced());
}

fn print_traversals(tree: &Tree<u32>) -> anyhow::Result<()> {
    println!("LevelOrder: ");
    tree.level_order_for_each(Some(|v: &u32| println!("{v}")))
        .context("level order traversal")?;
    println!("preOrder: ");
    tree.pre_order_for_each(|v| println!("{v}"));
    println!("inOrder: ");
    tree.in_order_for_each(|v| println!("{v}"));
    println!("postOrder: ");
    tree.post_order_for_each(|v| println!("{v}"));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let values = random_values(cli.count, &mut rng)?;
    log::info!("building tree from {values:?}");

    let mut tree = Tree::new(values);
    print_tree(&tree);
    print_traversals(&tree)?;

    let extra = cli
        .extra
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Adding {extra}: ");
    for x in cli.extra {
        tree.insert(x);
    }
    print_tree(&tree);

    println!("Calling rebalance()");
    tree.rebalance();
    print_tree(&tree);
    print_traversals(&tree)?;

    Ok(())
}
