use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
