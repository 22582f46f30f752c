use thiserror::Error;

#[derive(Debug, Error)]
pub enum StumbleError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
