use thiserror::Error;

pub type VisualResult<T> = Result<T, VisualError>;

#[derive(Debug, Error)]
pub enum VisualError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("template object `{object_id}` not found in chart instance graph")]
    ObjectNotFound { object_id: String },

    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("failed to fingerprint dataset: {0}")]
    Fingerprint(String),

    #[error("template engine error: {0}")]
    Engine(String),

    #[error("surface backend error: {0}")]
    Backend(String),
}
