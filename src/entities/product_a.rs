use crate::{AbstractProductA, Variant};

/// Product A of the first family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA1;

impl AbstractProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

/// Product A of the second family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}
