use crate::{AbstractProductA, AbstractProductB, Variant};

/// Creates one family of related products.
///
/// Signatures return abstract products; implementors instantiate the concrete
/// products of their own variant.
pub trait AbstractFactory: Send + Sync {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;

    fn create_product_b(&self) -> Box<dyn AbstractProductB>;

    fn variant(&self) -> Variant;
}
