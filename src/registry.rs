//! Inherited versus registered ("virtual") subclasses.
//!
//! A type becomes a subclass of [`MyAbstractClass`] in one of two ways:
//!
//! - it implements the trait, and [`AbcRegistry::inherit`] records how to view
//!   it as `&dyn MyAbstractClass`. It gets the provided method and its
//!   superclass is the abstract class;
//! - it is named with [`AbcRegistry::register`]. Membership checks accept it,
//!   but nothing is inherited: method resolution fails and its superclass is
//!   still `object`.
//!
//! The two relations live in separate tables and are never merged.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use log::{debug, info};

use crate::error::AbcError;

/// Root of every method resolution order.
pub const OBJECT: &str = "object";

pub trait MyAbstractClass: Any {
    fn concrete_method_in_abstract_class(&self) {
        info!("Concrete method from abstract class");
    }
}

type Upcast = fn(&dyn Any) -> Option<&dyn MyAbstractClass>;

fn upcast<T: MyAbstractClass>(value: &dyn Any) -> Option<&dyn MyAbstractClass> {
    value
        .downcast_ref::<T>()
        .map(|value| value as &dyn MyAbstractClass)
}

/// Drops the module path of the outer type. Generic arguments keep theirs.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let outer_end = full.find('<').unwrap_or(full.len());
    let start = full[..outer_end].rfind("::").map_or(0, |pos| pos + 2);
    &full[start..]
}

struct Inherited {
    type_name: &'static str,
    upcast: Upcast,
}

pub struct AbcRegistry {
    name: &'static str,
    inherited: HashMap<TypeId, Inherited>,
    virtual_subclasses: HashMap<TypeId, &'static str>,
}

impl AbcRegistry {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inherited: HashMap::new(),
            virtual_subclasses: HashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Records a real implementor.
    pub fn inherit<T: MyAbstractClass>(&mut self) -> &mut Self {
        let type_name = short_type_name::<T>();
        debug!("{} inherits from {}", type_name, self.name);
        self.inherited.insert(
            TypeId::of::<T>(),
            Inherited {
                type_name,
                upcast: upcast::<T>,
            },
        );
        self
    }

    /// Declares `T` a virtual subclass. `T` needs no relation to the trait.
    pub fn register<T: Any>(&mut self) -> &mut Self {
        let type_name = short_type_name::<T>();
        debug!("{} registered as a virtual subclass of {}", type_name, self.name);
        self.virtual_subclasses.insert(TypeId::of::<T>(), type_name);
        self
    }

    /// Membership check: inherited and registered types both count.
    pub fn is_subclass<T: Any>(&self) -> bool {
        let id = TypeId::of::<T>();
        self.inherited.contains_key(&id) || self.virtual_subclasses.contains_key(&id)
    }

    pub fn is_instance(&self, value: &dyn Any) -> bool {
        let id = value.type_id();
        self.inherited.contains_key(&id) || self.virtual_subclasses.contains_key(&id)
    }

    pub fn is_virtual_subclass<T: Any>(&self) -> bool {
        self.virtual_subclasses.contains_key(&TypeId::of::<T>())
    }

    /// Views `value` through the abstract class, which only works for
    /// inherited types.
    pub fn resolve<'a, T: Any>(&self, value: &'a T) -> Result<&'a dyn MyAbstractClass, AbcError> {
        let id = TypeId::of::<T>();
        let not_a_subclass = AbcError::NotASubclass {
            abc: self.name,
            type_name: short_type_name::<T>(),
        };

        if let Some(inherited) = self.inherited.get(&id) {
            return (inherited.upcast)(value).ok_or(not_a_subclass);
        }
        match self.virtual_subclasses.get(&id) {
            Some(&type_name) => Err(AbcError::NoInheritedImplementation {
                abc: self.name,
                type_name,
            }),
            None => Err(not_a_subclass),
        }
    }

    /// Calls the abstract class's concrete method on `value`, as if it had
    /// been inherited.
    pub fn call_concrete_method<T: Any>(&self, value: &T) -> Result<(), AbcError> {
        self.resolve(value)?.concrete_method_in_abstract_class();
        Ok(())
    }

    /// Method resolution order of `T`, most specific first. Registration does
    /// not add the abstract class.
    pub fn mro<T: Any>(&self) -> Vec<&'static str> {
        let id = TypeId::of::<T>();
        let own_name = self
            .inherited
            .get(&id)
            .map(|inherited| inherited.type_name)
            .unwrap_or_else(short_type_name::<T>);

        let mut mro = vec![own_name];
        if self.inherited.contains_key(&id) {
            mro.push(self.name);
        }
        mro.push(OBJECT);
        mro
    }

    /// Where an explicit superclass call from `T` lands.
    pub fn super_class<T: Any>(&self) -> &'static str {
        if self.inherited.contains_key(&TypeId::of::<T>()) {
            self.name
        } else {
            OBJECT
        }
    }
}

// ============================================================================
// The demo classes
// ============================================================================

/// Implements [`MyAbstractClass`] and inherits its concrete method.
#[derive(Debug, Default)]
pub struct InheritingClass;

impl MyAbstractClass for InheritingClass {}

/// Unrelated to [`MyAbstractClass`]; only ever registered with it.
#[derive(Debug, Default)]
pub struct ConcreteClass;

impl ConcreteClass {
    pub fn make(&self) {
        info!("making!");
    }

    pub fn access_super_class(&self, registry: &AbcRegistry) -> &'static str {
        registry.super_class::<Self>()
    }
}

/// `MyAbstractClass` with `InheritingClass` inheriting from it and
/// `ConcreteClass` registered as a virtual subclass.
pub fn my_abstract_class() -> AbcRegistry {
    let mut registry = AbcRegistry::new("MyAbstractClass");
    registry
        .inherit::<InheritingClass>()
        .register::<ConcreteClass>();
    registry
}
