// src/factories/mod.rs

mod factory_one;
mod factory_two;

pub use factory_one::ConcreteFactory1;
pub use factory_two::ConcreteFactory2;

use crate::{AbstractFactory, Variant};

/// Returns a boxed factory for the given product family.
pub fn for_variant(variant: Variant) -> Box<dyn AbstractFactory> {
    tracing::debug!(%variant, "selecting factory");
    match variant {
        Variant::One => Box::new(ConcreteFactory1),
        Variant::Two => Box::new(ConcreteFactory2),
    }
}

/// Collection of the concrete factories, one per product family.
pub struct Factories {
    first: ConcreteFactory1,
    second: ConcreteFactory2,
}

impl Factories {
    /// Creates a new collection of factories.
    pub fn new() -> Self {
        Self {
            first: ConcreteFactory1,
            second: ConcreteFactory2,
        }
    }

    /// Returns the factory of the first family.
    pub fn first(&self) -> &ConcreteFactory1 {
        &self.first
    }

    /// Returns the factory of the second family.
    pub fn second(&self) -> &ConcreteFactory2 {
        &self.second
    }

    /// Returns the factory of the given family.
    pub fn get(&self, variant: Variant) -> &dyn AbstractFactory {
        match variant {
            Variant::One => &self.first,
            Variant::Two => &self.second,
        }
    }
}

impl Default for Factories {
    fn default() -> Self {
        Self::new()
    }
}
