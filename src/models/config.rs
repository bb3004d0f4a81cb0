use crate::{FactoryError, Variant};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

/// Environment variable naming an optional TOML config file for the demo.
pub const CONFIG_ENV_VAR: &str = "ABSTRACT_FACTORY_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Factory variants to run the client code against, in order.
    pub variants: Vec<Variant>,
}

impl DemoConfig {
    pub fn new(variants: Vec<Variant>) -> Self {
        Self { variants }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, FactoryError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FactoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FactoryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or falls back to the default.
    pub fn from_env() -> Result<Self, FactoryError> {
        Self::from_path_or_default(std::env::var_os(CONFIG_ENV_VAR))
    }

    fn from_path_or_default(path: Option<OsString>) -> Result<Self, FactoryError> {
        match path {
            Some(path) => {
                tracing::debug!(path = ?path, "loading demo config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), FactoryError> {
        if self.variants.is_empty() {
            return Err(FactoryError::invalid_config(
                "at least one factory variant must be configured",
            ));
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(Variant::ALL.to_vec())
    }
}
