// src/factories/factory_one.rs

use crate::{
    AbstractFactory, AbstractProductA, AbstractProductB, ConcreteProductA1, ConcreteProductB1,
    Variant,
};

/// Factory for the first product family (A1 + B1).
///
/// Returns abstract products while instantiating the concrete products of
/// variant 1, so everything it creates is mutually compatible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        tracing::debug!(variant = %self.variant(), "creating product A1");
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        tracing::debug!(variant = %self.variant(), "creating product B1");
        Box::new(ConcreteProductB1)
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}
