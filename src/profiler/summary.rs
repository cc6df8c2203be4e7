use std::collections::BTreeMap;
use super::entry::{ProfileEntry, TaskState};

/// Aggregate view over the recorded entries, for end-of-run reporting.
/// Observational only: recording logic never reads it back.
#[derive(Debug, Clone, Default)]
pub struct ProfileSummary {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub running: u64,
    pub total_dur_us: u64,
    pub max_dur_us: u64,
    pub avg_dur_us: f64,
}

pub fn compute_summary(entries: &BTreeMap<u64, ProfileEntry>) -> ProfileSummary {
    let mut summary = ProfileSummary::default();

    let mut stopped_count = 0;

    for entry in entries.values() {
        summary.total += 1;

        match entry.state {
            TaskState::Running => summary.running += 1,
            TaskState::Succeeded => summary.succeeded += 1,
            TaskState::Failed => summary.failed += 1,
        }

        if let Some(dur) = entry.dur_us {
            summary.total_dur_us += dur;
            if dur > summary.max_dur_us {
                summary.max_dur_us = dur;
            }
            stopped_count += 1;
        }
    }

    // Compute Averages
    if stopped_count > 0 {
        summary.avg_dur_us = summary.total_dur_us as f64 / stopped_count as f64;
    }

    summary
}
