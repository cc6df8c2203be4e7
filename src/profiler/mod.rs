//! Task Timing & Profile Output
//!
//! # PROTOCOL INVARIANT
//! The recorder is driven by the task scheduler: every id is `start`ed at
//! most once between `clear`s, and `stop` must follow exactly one matching
//! `start`. Violations are caller bugs and surface as errors, never as
//! repaired state.
//!
//! # THREADING INVARIANT
//! The recorder is **NOT** internally synchronized. A host that runs tasks
//! in parallel must serialize calls to it (or shard ids per recorder).

pub mod clock;
pub mod entry;
pub mod error;
pub mod manifest;
pub mod recorder;
pub mod summary;
pub mod trace;
