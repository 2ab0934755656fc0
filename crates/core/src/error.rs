#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

pub type SummaryResult<T> = std::result::Result<T, SummaryError>;
