use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Failed to write client output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to read config file `{}`: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown product variant `{0}`")]
    UnknownVariant(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FactoryError {
    pub fn unknown_variant<S: Into<String>>(name: S) -> Self {
        Self::UnknownVariant(name.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
