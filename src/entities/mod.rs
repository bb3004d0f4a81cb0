mod product_a;
mod product_b;

pub use product_a::*;
pub use product_b::*;
