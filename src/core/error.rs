use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxError {
    #[error("handler fault: {0}")]
    HandlerFault(String),

    #[error("failed to spawn interpreter '{program}': {source}")]
    SpawnFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    CommandFailed(String),

    #[error("no valid structured result found in output")]
    MalformedPayload { stderr: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VoxError>;
