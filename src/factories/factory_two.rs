// src/factories/factory_two.rs

use crate::{
    AbstractFactory, AbstractProductA, AbstractProductB, ConcreteProductA2, ConcreteProductB2,
    Variant,
};

/// Factory for the second product family (A2 + B2).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        tracing::debug!(variant = %self.variant(), "creating product A2");
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        tracing::debug!(variant = %self.variant(), "creating product B2");
        Box::new(ConcreteProductB2)
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}
