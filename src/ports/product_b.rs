use crate::{AbstractProductA, Variant};

/// Base interface shared by every variant of product B.
///
/// Any two products can interact, but the interaction is only meaningful
/// between products of the same variant.
pub trait AbstractProductB: Send + Sync {
    /// Product B's own work.
    fn useful_function_b(&self) -> String;

    /// Collaborates with a product A.
    ///
    /// Accepts any product A. A factory guarantees its products share a
    /// variant, so callers that go through one factory always pass a
    /// compatible collaborator.
    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;

    fn variant(&self) -> Variant;
}
