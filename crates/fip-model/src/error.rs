use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown deployment profile: {0}")]
    UnknownProfile(String),

    #[error("invalid environment line {line}: {reason}")]
    InvalidEnvLine { line: usize, reason: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
