use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GeoJSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern compilation error: {0}")]
    Pattern(#[from] regex::Error),
}
