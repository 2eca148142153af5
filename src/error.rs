use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    #[error(transparent)]
    Common(#[from] aoi_common::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InspectorError>;
