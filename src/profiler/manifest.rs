use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Deserialize)]
struct Manifest {
    name: Option<String>,
}

/// Best-effort lookup of the manifest `name` in `dir`.
///
/// Display metadata only: a missing or unparsable manifest yields `None`
/// and must never fail the surrounding build.
pub fn package_name(dir: &Path) -> Option<String> {
    let path = dir.join(MANIFEST_FILE);
    let raw = std::fs::read_to_string(&path).ok()?;

    match serde_json::from_str::<Manifest>(&raw) {
        Ok(manifest) => manifest.name,
        Err(e) => {
            debug!("Ignoring Unparsable Manifest at {:?}: {}", path, e);
            None
        }
    }
}
