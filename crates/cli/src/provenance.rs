use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// File name of the run sidecar inside the output directory.
pub const SIDECAR_NAME: &str = "keggin.provenance.json";

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Contents of a provenance sidecar.
#[derive(Serialize)]
struct Provenance<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    outputs: Vec<String>,
}

/// Write `<dir>/keggin.provenance.json` with the code revision, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar(dir: &Path, params: &Value, outputs: &[PathBuf]) -> Result<PathBuf> {
    let callsite = Location::caller();
    let doc = Provenance {
        code_rev: current_git_rev(),
        version: keggin::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params,
        outputs: outputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect(),
    };
    let path = dir.join(SIDECAR_NAME);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` (compile time, then run time), else `git rev-parse HEAD`, else `unknown`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
