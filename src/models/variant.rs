use crate::FactoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product family a factory or product belongs to.
///
/// Products of the same variant are designed to work together; a factory
/// only ever hands out products of its own variant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Variant {
    One,
    Two,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::One, Variant::Two];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
        }
    }
}

impl TryFrom<&str> for Variant {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "1" | "one" | "first" => Ok(Self::One),
            "2" | "two" | "second" => Ok(Self::Two),
            _ => Err(FactoryError::unknown_variant(value)),
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = FactoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        <Self as TryFrom<&str>>::try_from(value.as_str())
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        variant.to_string()
    }
}

impl std::str::FromStr for Variant {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as TryFrom<&str>>::try_from(s)
    }
}
