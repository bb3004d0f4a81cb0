mod config;
mod variant;

pub use config::*;
pub use variant::*;
