use crate::{AbstractProductA, AbstractProductB, Variant};

fn collaborate(own: Variant, name: &str, collaborator: &dyn AbstractProductA) -> String {
    if collaborator.variant() != own {
        tracing::debug!(
            product = name,
            collaborator_variant = %collaborator.variant(),
            "collaborating with a product A of another variant"
        );
    }

    let result = collaborator.useful_function_a();
    format!("The result of the {} collaborating with the ({})", name, result)
}

/// Product B of the first family. Only works correctly with product A1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB1;

impl AbstractProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        collaborate(self.variant(), "B1", collaborator)
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

/// Product B of the second family. Only works correctly with product A2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        collaborate(self.variant(), "B2", collaborator)
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}
