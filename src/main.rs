use tempo::{ProfileRecorder, ProfilerConfig};
use std::process::Command;

// Thin driver: runs each argument as a shell command, timing it as one
// task, then flushes the profile. Stands in for the build tool's scheduler.
fn main() -> anyhow::Result<()> {
    // Initialize logging/tracing
    tracing_subscriber::fmt::init();

    let commands: Vec<String> = std::env::args().skip(1).collect();
    if commands.is_empty() {
        anyhow::bail!("usage: tempo <command> [<command> ...]");
    }

    let mut recorder = ProfileRecorder::new(ProfilerConfig::default());

    for (ordinal, command) in commands.iter().enumerate() {
        let id = ordinal as u64 + 1;
        recorder.start(id, command)?;

        let status = Command::new("sh").arg("-c").arg(command).status();

        let success = match status {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::warn!("Failed to spawn '{}': {}", command, e);
                false
            }
        };

        recorder.stop(id, success)?;
    }

    let summary = recorder.summary();
    tracing::info!(
        "Run Complete: {} tasks ({} succeeded, {} failed), avg {:.1}ms",
        summary.total,
        summary.succeeded,
        summary.failed,
        summary.avg_dur_us / 1000.0
    );

    let path = recorder.write()?;
    println!("Profile written to {}", path.display());

    Ok(())
}
