//! An overriding `pick` that still runs the abstract body first.
//!
//! Run with: cargo run --bin inheritance_call_super

use batching_protocols::logging::init_logging;
use batching_protocols::tombola::{BingoCage, MyTombola, Tombola, TombolaExt};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    println!("=== MyTombola::pick ===");
    if let Err(err) = MyTombola.pick() {
        println!("-> {err}");
    }

    println!("\n=== Provided methods on a BingoCage ===");
    let mut cage = BingoCage::new(1..=5);
    println!("inspect: {:?}", cage.inspect());
    println!("loaded:  {}", cage.loaded());

    let picked = cage.pick()?;
    println!("picked:  {picked}");
    println!("inspect: {:?}", cage.inspect());

    while cage.pick().is_ok() {}
    println!("loaded after draining: {}", cage.loaded());

    Ok(())
}
