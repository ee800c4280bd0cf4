use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Write `document` to a temporary catalog file that lives as long as the
/// returned handle.
pub fn write_catalog(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer_pretty(&mut file, document)?;
    file.flush()?;
    Ok(file)
}

/// Command for one of the crate's binaries, isolated from the caller's
/// catalog override.
pub fn helper(name: &str) -> Command {
    let path = match name {
        "guide-query" => env!("CARGO_BIN_EXE_guide-query"),
        "catalog-lint" => env!("CARGO_BIN_EXE_catalog-lint"),
        other => panic!("unknown helper {other}"),
    };
    let mut cmd = Command::new(path);
    cmd.env_remove("CROPDOC_CATALOG");
    cmd.env_remove("CROPDOC_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("helper stdout was not JSON")
}
