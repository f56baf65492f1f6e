use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("renderer timed out after {0}s")]
    Timeout(u64),
    #[error("could not start renderer '{bin}': {reason}")]
    Spawn { bin: String, reason: String },
    #[error("renderer exited with {code:?}: {stderr}")]
    ExitStatus { code: Option<i32>, stderr: String },
    #[error("renderer produced an empty document")]
    Empty,
}

impl RenderError {
    /// Un binario ausente no se arregla reintentando; el resto sí puede.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, RenderError::Spawn { .. })
    }
}
