use crate::Variant;

/// Base interface shared by every variant of product A.
pub trait AbstractProductA: Send + Sync {
    fn useful_function_a(&self) -> String;

    fn variant(&self) -> Variant;
}
