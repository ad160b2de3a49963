use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid round count: {rounds} (must be between 1 and 10)")]
    InvalidRounds { rounds: u32 },

    #[error("Non-finite numeric input: {context}")]
    NonFinite { context: String },

    #[error("Unknown platform: '{0}' (expected IG or Threads)")]
    UnknownPlatform(String),

    #[error("Persona parse error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
