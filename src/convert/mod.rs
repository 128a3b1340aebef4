//! XML to SWIG docstring conversion
//!
//! The actual rendering is delegated to a [`DocRenderer`], normally an
//! external doxy2swig process. [`DocConverter`] drives it over a set of
//! XML files and applies the failure policy.

pub mod renderer;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DocstringError, Result};

pub use renderer::{CommandRenderer, DocRenderer, RenderOptions, DEFAULT_CONVERTER};

/// Extension of generated docstring fragments
pub const FRAGMENT_EXTENSION: &str = "i";

/// What to do when a single file fails to convert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop and return the error
    #[default]
    Abort,
    /// Log a warning and continue with the next file
    Skip,
}

/// A conversion that was skipped under [`FailurePolicy::Skip`]
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub input: PathBuf,
    pub reason: String,
}

/// Outcome of converting a batch of XML files
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

impl ConversionSummary {
    pub fn merge(&mut self, other: ConversionSummary) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
    }
}

/// Fragment path for `input` inside `output_dir`: the input's file name up
/// to its first `.`, with the fragment extension.
pub fn fragment_path(input: &Path, output_dir: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    output_dir.join(format!("{}.{}", stem, FRAGMENT_EXTENSION))
}

/// Create `dir` and its parents if missing. An existing directory is kept.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        std::fs::create_dir_all(dir).map_err(|source| DocstringError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Runs a renderer over XML files
pub struct DocConverter<'a> {
    renderer: &'a dyn DocRenderer,
    policy: FailurePolicy,
}

impl<'a> DocConverter<'a> {
    pub fn new(renderer: &'a dyn DocRenderer) -> Self {
        Self {
            renderer,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Convert each file into `output_dir`, creating it if needed.
    pub fn convert(&self, files: &[PathBuf], output_dir: &Path) -> Result<ConversionSummary> {
        ensure_dir(output_dir)?;

        let mut summary = ConversionSummary::default();
        for input in files {
            let output = fragment_path(input, output_dir);
            match self.renderer.render(input, &output) {
                Ok(()) => summary.written.push(output),
                Err(e) => match self.policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        tracing::warn!("Skipping {}: {}", input.display(), e);
                        summary.skipped.push(SkippedFile {
                            input: input.clone(),
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        Ok(summary)
    }
}
