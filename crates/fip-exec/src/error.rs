use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("invalid command spec: {0}")]
    InvalidSpec(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{label} exited with non-zero code: {code}")]
    NonZeroExit { label: String, code: i32 },

    #[error("{label} terminated by signal")]
    Signaled { label: String },
}
