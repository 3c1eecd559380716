//! Do registered subclasses inherit the abstract class's concrete methods?
//!
//! Registration makes membership checks pass, but the abstract class never
//! enters the registered type's method resolution order, so none of its
//! methods are reachable, not even through an explicit superclass call.
//!
//! Run with: cargo run --bin registered_subclasses

use batching_protocols::logging::init_logging;
use batching_protocols::registry::{my_abstract_class, ConcreteClass, InheritingClass};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let registry = my_abstract_class();

    println!("=== Registered: ConcreteClass ===");
    let cc = ConcreteClass;
    cc.make();
    println!(
        "subclass of {}: {}",
        registry.name(),
        registry.is_subclass::<ConcreteClass>()
    );
    println!("mro: {:?}", registry.mro::<ConcreteClass>());
    println!("super: {}", cc.access_super_class(&registry));
    match registry.call_concrete_method(&cc) {
        Ok(()) => println!("concrete method was inherited"),
        Err(err) => println!("-> {err}"),
    }

    println!("\n=== Inherited: InheritingClass ===");
    println!(
        "subclass of {}: {}",
        registry.name(),
        registry.is_subclass::<InheritingClass>()
    );
    println!("mro: {:?}", registry.mro::<InheritingClass>());
    println!("super: {}", registry.super_class::<InheritingClass>());
    registry.call_concrete_method(&InheritingClass)?;

    Ok(())
}
