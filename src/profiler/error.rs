use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfilerError {
    /// `start` was called for an id that is already recorded.
    #[error("task {0} was already started")]
    DuplicateTask(u64),

    /// `stop` was called for an id with no prior `start`.
    #[error("task {0} was never started")]
    UnknownTask(u64),

    #[error("failed to write profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}
