use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::entry::{ProfileEntry, TaskState};
use super::error::ProfilerError;
use super::manifest;
use super::summary::{compute_summary, ProfileSummary};
use super::trace::{OtherData, TraceEvent, TraceFile};

/// Label stamped into `otherData.source` and the output file name.
pub const SOURCE_LABEL: &str = "just-tasks";

pub const DISPLAY_TIME_UNIT: &str = "ms";

#[derive(Debug, Clone, Default)]
pub struct ProfilerConfig {
    /// Where the profile file lands; current working directory when `None`.
    pub output_dir: Option<PathBuf>,
    /// Overrides [`SOURCE_LABEL`] when set.
    pub source_label: Option<String>,
}

/// Records start/stop timing for scheduler-driven tasks and flushes them
/// as one Chrome trace document per session.
pub struct ProfileRecorder {
    entries: BTreeMap<u64, ProfileEntry>,
    session_start: std::time::Instant,
    session_start_wall: DateTime<Utc>,
    config: ProfilerConfig,
    clock: Box<dyn Clock>,
}

impl ProfileRecorder {
    pub fn new(config: ProfilerConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Construction seam for tests: inject a deterministic clock.
    pub fn with_clock(config: ProfilerConfig, clock: Box<dyn Clock>) -> Self {
        let session_start = clock.monotonic();
        let session_start_wall = clock.wall();

        Self {
            entries: BTreeMap::new(),
            session_start,
            session_start_wall,
            config,
            clock,
        }
    }

    /// Begin timing task `id`.
    ///
    /// Captures the working directory and, opportunistically, the manifest
    /// `name` found there.
    pub fn start(&mut self, id: u64, name: &str) -> Result<(), ProfilerError> {
        if self.entries.contains_key(&id) {
            return Err(ProfilerError::DuplicateTask(id));
        }

        let started_at = self.clock.monotonic();
        let ts_us = started_at
            .saturating_duration_since(self.session_start)
            .as_micros() as u64;

        let cwd = std::env::current_dir().unwrap_or_default();
        let package_name = manifest::package_name(&cwd);

        debug!("Task Started: id={} name='{}'", id, name);

        self.entries.insert(
            id,
            ProfileEntry {
                name: name.to_string(),
                ts_us,
                pid: self.clock.pid(),
                task_id: id,
                dur_us: None,
                cwd,
                package_name,
                state: TaskState::Running,
                started_at,
            },
        );

        Ok(())
    }

    /// Finish timing task `id`, marking it succeeded or failed.
    pub fn stop(&mut self, id: u64, success: bool) -> Result<(), ProfilerError> {
        let now = self.clock.monotonic();

        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(ProfilerError::UnknownTask(id))?;

        let dur_us = now.saturating_duration_since(entry.started_at).as_micros() as u64;
        entry.dur_us = Some(dur_us);
        entry.state = if success {
            TaskState::Succeeded
        } else {
            TaskState::Failed
        };

        debug!("Task Stopped: id={} success={} dur_us={}", id, success, dur_us);

        Ok(())
    }

    /// Drop all entries, allowing ids to be reused.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn summary(&self) -> ProfileSummary {
        // Delegate to pure functional summary module
        compute_summary(&self.entries)
    }

    /// Stamp the session end, serialize every entry, and write the trace
    /// document into the configured output directory.
    ///
    /// Returns the path of the file written.
    pub fn write(&mut self) -> Result<PathBuf, ProfilerError> {
        let end_wall = self.clock.wall();

        let source = self
            .config
            .source_label
            .clone()
            .unwrap_or_else(|| SOURCE_LABEL.to_string());

        let document = TraceFile {
            trace_events: self.entries.values().map(TraceEvent::from).collect(),
            display_time_unit: DISPLAY_TIME_UNIT.to_string(),
            other_data: OtherData {
                source: source.clone(),
                start_time: self
                    .session_start_wall
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                end_time: end_wall.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        };

        let output_dir = match &self.config.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        // ISO-8601 end time with the separators stripped.
        let stamp = end_wall.format("%Y%m%dT%H%M%S%3fZ");
        let path = output_dir.join(format!("{}-Profile-{}.json", source, stamp));

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&path, json)?;

        info!("Profile Written: {:?} ({} events)", path, document.trace_events.len());

        Ok(path)
    }
}
