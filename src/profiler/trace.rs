use serde::{Deserialize, Serialize};
use super::entry::{ProfileEntry, TaskState};

/// Top-level document understood by chrome://tracing and Perfetto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceFile {
    #[serde(rename = "traceEvents")]
    pub trace_events: Vec<TraceEvent>,

    /// Display unit only; the `ts`/`dur` values themselves stay in µs.
    #[serde(rename = "displayTimeUnit")]
    pub display_time_unit: String,

    #[serde(rename = "otherData")]
    pub other_data: OtherData,
}

/// A Chrome trace "complete event" (`ph:"X"`) with our extra task fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    pub name: String,
    pub ph: String,
    /// Microseconds since the session epoch.
    pub ts: u64,
    pub pid: u32,
    /// The task id (viewers render each task on its own lane).
    pub tid: u64,
    /// Omitted while the task is still running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dur: Option<u64>,
    pub state: TaskState,
    pub cwd: String,
    #[serde(rename = "packageName", skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherData {
    pub source: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}

impl From<&ProfileEntry> for TraceEvent {
    fn from(entry: &ProfileEntry) -> Self {
        TraceEvent {
            name: entry.name.clone(),
            ph: "X".to_string(),
            ts: entry.ts_us,
            pid: entry.pid,
            tid: entry.task_id,
            dur: entry.dur_us,
            state: entry.state,
            cwd: entry.cwd.display().to_string(),
            package_name: entry.package_name.clone(),
        }
    }
}
