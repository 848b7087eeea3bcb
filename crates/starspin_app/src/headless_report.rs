//! Report output model for headless diagnostics runs.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a headless diagnostics run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Running totals collected by a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    pub frames: u64,
    pub respawns: u64,
    pub tweens_completed: u64,
    pub symbol_swaps: u64,
    pub spins_started: u64,
    pub spins_completed: u64,
    pub camera_depth: f64,
}

/// Machine-readable result of a headless diagnostics run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub stats: FrameStats,
}

impl HeadlessReport {
    pub fn passed(elapsed_frames: u64, elapsed_ms: u64, stats: FrameStats) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            stats,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
        stats: FrameStats,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
            stats,
        }
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Write the report under the working directory, creating parent
    /// directories as needed
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        ensure_contained(path)?;
        let json = self.to_json()?;
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create report directory {}", dir.display()))?;
        }
        fs::write(path, json).with_context(|| format!("Failed to write report {}", path.display()))
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self).context("Failed to serialize report")?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Reports stay inside the working directory: no roots, drive prefixes or `..`
fn ensure_contained(path: &Path) -> Result<()> {
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                bail!("report path must be relative, got {}", path.display())
            }
            Component::ParentDir => bail!("report path cannot contain '..', got {}", path.display()),
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}
