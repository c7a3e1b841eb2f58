use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::domain::models::{Endorser, JsonOut, Violator};

/// Machine-readable report envelope on stdout, replacing the file output.
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// `output.txt`: one `name: excess` row per violator, worst first.
pub fn write_violators(dir: &Path, violators: &[Violator]) -> anyhow::Result<PathBuf> {
    let mut body = String::new();
    for v in violators {
        writeln!(body, "{}: {}", v.name, v.over_by)?;
    }
    let path = dir.join("output.txt");
    std::fs::write(&path, body)?;
    Ok(path)
}

/// `output.txt`, verbose endorsers format: name and truncated percentage,
/// then the comma-joined violators that nation endorses, then a blank line.
pub fn write_endorsers_verbose(dir: &Path, endorsers: &[Endorser]) -> anyhow::Result<PathBuf> {
    let mut body = String::new();
    for e in endorsers {
        writeln!(body, "{}: {}%", e.name, e.percentage as u32)?;
        writeln!(body, "{}\n", e.endorsing.join(","))?;
    }
    let path = dir.join("output.txt");
    std::fs::write(&path, body)?;
    Ok(path)
}

/// `output.csv`: `name,percentage` rows.
pub fn write_endorsers_csv(dir: &Path, endorsers: &[Endorser]) -> anyhow::Result<PathBuf> {
    let mut body = String::new();
    for e in endorsers {
        writeln!(body, "{},{}", e.name, e.percentage as u32)?;
    }
    let path = dir.join("output.csv");
    std::fs::write(&path, body)?;
    Ok(path)
}
