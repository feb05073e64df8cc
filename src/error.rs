#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error("invalid helper configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
