pub mod profiler;

// Re-export specific items if needed for convenient access
pub use profiler::error::ProfilerError;
pub use profiler::recorder::{ProfileRecorder, ProfilerConfig};
