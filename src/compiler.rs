// src/compiler.rs
//! Compilation orchestrator
//!
//! Owns the scoped temporary workspace for one compilation call: write the
//! rendered markup, walk the engine candidates in priority order until one
//! produces the artifact, relocate it to the requested output path. The
//! workspace is removed on every exit path.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use tracing::{info, warn};

use crate::engines::{is_success, CompilerCandidate, ARTIFACT_FILE, MARKUP_FILE};

pub struct Orchestrator<'a> {
    candidates: &'a [CompilerCandidate],
    temp_root: Option<PathBuf>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(candidates: &'a [CompilerCandidate]) -> Self {
        Self {
            candidates,
            temp_root: None,
        }
    }

    /// Scratch space for the temporary workspace; defaults to the system
    /// temp directory.
    pub fn with_temp_root(mut self, dir: PathBuf) -> Self {
        self.temp_root = Some(dir);
        self
    }

    /// Compile `markup` into a PDF at `output_path`, overwriting any file
    /// already there.
    ///
    /// Candidates are attempted strictly in order; the first one whose exit
    /// status is zero AND whose artifact is on disk wins. Each engine runs
    /// exactly once. LaTeX resolves internal cross-references on a second
    /// pass, so documents relying on `\ref`/`\pageref` may render with
    /// unresolved references; known limitation, accepted for latency.
    pub fn compile(&self, markup: &str, output_path: &Path) -> Result<PathBuf> {
        if self.candidates.is_empty() {
            anyhow::bail!(
                "No LaTeX engine available. Install tectonic or pdflatex (cvpress-doctor prints platform guidance)"
            );
        }

        let workspace = self.create_workspace()?;
        let result = self.compile_in(workspace.path(), markup, output_path);

        // Drop would remove the directory anyway; closing explicitly lets a
        // cleanup problem surface as a warning instead of vanishing.
        if let Err(e) = workspace.close() {
            warn!("Failed to remove temporary workspace: {}", e);
        }

        result
    }

    fn create_workspace(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("cvpress-");
        match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .context("Failed to create temporary workspace")
    }

    fn compile_in(&self, workspace: &Path, markup: &str, output_path: &Path) -> Result<PathBuf> {
        let markup_path = workspace.join(MARKUP_FILE);
        fs::write(&markup_path, markup)
            .with_context(|| format!("Failed to write markup file: {}", markup_path.display()))?;

        let artifact_path = workspace.join(ARTIFACT_FILE);
        let mut last_failure = String::new();

        for candidate in self.candidates {
            info!("Attempting engine: {}", candidate.label);

            let diagnostic = match Command::new(&candidate.program)
                .args(&candidate.args)
                .current_dir(workspace)
                .output()
            {
                Ok(output) => {
                    if is_success(output.status.success(), artifact_path.is_file()) {
                        // Markup deletion is best-effort; workspace teardown
                        // removes it anyway.
                        if let Err(e) = fs::remove_file(&markup_path) {
                            warn!("Failed to clean up markup file: {}", e);
                        }
                        relocate_artifact(&artifact_path, output_path)?;
                        info!(
                            "Compiled PDF with {} to {}",
                            candidate.label,
                            output_path.display()
                        );
                        return Ok(output_path.to_path_buf());
                    }

                    if output.status.success() {
                        format!(
                            "Engine {} exited successfully but produced no {}",
                            candidate.label, ARTIFACT_FILE
                        )
                    } else {
                        format!(
                            "Engine {} failed ({}): stderr={}, stdout={}",
                            candidate.label,
                            output.status,
                            String::from_utf8_lossy(&output.stderr).trim(),
                            String::from_utf8_lossy(&output.stdout).trim()
                        )
                    }
                }
                // The executable can vanish between probe and invoke; the
                // next candidate gets its chance like after any failure.
                Err(e) => format!(
                    "Engine {} could not be launched: {}",
                    candidate.label, e
                ),
            };

            warn!("{}", diagnostic);
            last_failure = diagnostic;
        }

        anyhow::bail!("All engines failed to compile the resume. Last error: {}", last_failure)
    }
}

/// Move the produced artifact to its final location, replacing whatever is
/// there. The temp workspace is frequently on another filesystem, where a
/// rename cannot reach, hence the copy-then-delete fallback.
fn relocate_artifact(artifact_path: &Path, output_path: &Path) -> Result<()> {
    if output_path.exists() {
        fs::remove_file(output_path).with_context(|| {
            format!(
                "Failed to replace existing output file: {}",
                output_path.display()
            )
        })?;
    }

    if fs::rename(artifact_path, output_path).is_ok() {
        return Ok(());
    }

    fs::copy(artifact_path, output_path).with_context(|| {
        format!(
            "Failed to move compiled PDF to output path: {}",
            output_path.display()
        )
    })?;
    if let Err(e) = fs::remove_file(artifact_path) {
        warn!("Failed to clean up compiled artifact: {}", e);
    }
    Ok(())
}
