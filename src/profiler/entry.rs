use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

/// Lifecycle of a single task invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Running,
    Succeeded,
    Failed,
}

/// One record per task invocation, keyed by task id in the recorder.
#[derive(Debug, Clone)]
pub struct ProfileEntry {
    pub name: String,
    /// Microseconds since the session epoch (recorder creation).
    pub ts_us: u64,
    pub pid: u32,
    /// Caller-supplied id; doubles as the trace `tid`.
    pub task_id: u64,
    /// Elapsed microseconds, set only by `stop`.
    pub dur_us: Option<u64>,
    /// Working directory at start time.
    pub cwd: PathBuf,
    /// `name` field of the manifest in `cwd`, if one was readable.
    pub package_name: Option<String>,
    pub state: TaskState,
    /// Raw monotonic start time; duration is computed against this at stop.
    pub started_at: Instant,
}
