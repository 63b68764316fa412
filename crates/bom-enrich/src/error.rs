use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    /// A part information source could not answer.
    #[error("part information lookup failed: {message}")]
    Lookup { message: String },
}

pub type Result<T> = std::result::Result<T, EnrichError>;
