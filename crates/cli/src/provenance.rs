//! Provenance sidecars: `<stem>.provenance.json` next to every artifact the CLI
//! writes, recording which command produced it, from which inputs, with which
//! options, and what the result looked like.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command reports about one artifact.
pub struct Payload {
    command: &'static str,
    params: Map<String, Value>,
    inputs: Vec<String>,
    summary: Map<String, Value>,
}

impl Payload {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            params: Map::new(),
            inputs: Vec::new(),
            summary: Map::new(),
        }
    }

    /// Option the command ran with (algorithm, seed, bound policy, ...).
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs
            .push(input.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Size of a part of the result (hull vertices, crossings, points).
    pub fn count(mut self, key: &str, n: usize) -> Self {
        self.summary.insert(key.to_string(), Value::from(n));
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    command: &'static str,
    code_rev: String,
    lib_version: &'static str,
    callsite: Callsite,
    params: &'a Map<String, Value>,
    inputs: &'a [String],
    outputs: [String; 1],
    summary: &'a Map<String, Value>,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    crate::input::ensure_parent(&path)?;

    let caller = Location::caller();
    let doc = Sidecar {
        command: payload.command,
        code_rev: current_git_rev(),
        lib_version: hullsweep::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: &payload.params,
        inputs: &payload.inputs,
        outputs: [artifact.to_string_lossy().into_owned()],
        summary: &payload.summary,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(command = payload.command, sidecar = %path.display(), "provenance");
    Ok(path)
}

/// `dir/hull.json` → `dir/hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/output/hull.json"));
        assert_eq!(derived, Path::new("/tmp/output/hull.provenance.json"));
        let bare = sidecar_path(Path::new("/tmp/output/points"));
        assert_eq!(bare, Path::new("/tmp/output/points.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_params_and_summary() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("hull")
            .param("algo", "graham")
            .param("checked", true)
            .input("points.csv")
            .count("vertices", 4);
        let path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "hull");
        assert_eq!(parsed["params"]["algo"], "graham");
        assert_eq!(parsed["params"]["checked"], true);
        assert_eq!(parsed["inputs"][0], "points.csv");
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["summary"]["vertices"], 4);
        assert_eq!(parsed["lib_version"], hullsweep::VERSION);
    }
}
