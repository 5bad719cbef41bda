use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigateToError {
    #[error("Invalid symbol info: {0}")]
    InvalidSymbolInfo(String),

    #[error("Kind label must not be empty")]
    InvalidKind,

    #[error("Navigable item is not a declared symbol: {0}")]
    UnexpectedNavigableItem(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, NavigateToError>;
