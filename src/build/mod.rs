//! Per-component docstring aggregation
//!
//! For every header of a component, the Doxygen XML files are located and
//! converted into `<swig_dir>/tmp_<component>/`. All fragments found there
//! are then concatenated into `<swig_dir>/<component>-docstrings.i`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use serde::Serialize;

use crate::config::{DoxygenConfig, HeaderList};
use crate::convert::{
    ensure_dir, CommandRenderer, ConversionSummary, DocConverter, DocRenderer, FailurePolicy,
    SkippedFile, FRAGMENT_EXTENSION,
};
use crate::error::Result;
use crate::locator::{glob_in, XmlLocator};

/// Directory receiving the per-file fragments of a component
pub fn fragment_dir(swig_dir: &Path, component: &str) -> PathBuf {
    swig_dir.join(format!("tmp_{}", component))
}

/// Final docstring file of a component
pub fn output_file(swig_dir: &Path, component: &str) -> PathBuf {
    swig_dir.join(format!("{}-docstrings.i", component))
}

/// Summary of one component build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub component: String,
    pub output_file: PathBuf,
    pub headers: usize,
    pub xml_files: usize,
    pub fragments_written: usize,
    pub fragments_concatenated: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Builds the docstring file of a component
pub struct DocstringBuilder<'a> {
    renderer: &'a dyn DocRenderer,
    policy: FailurePolicy,
}

impl<'a> DocstringBuilder<'a> {
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

    /// Build `<swig_dir>/<component>-docstrings.i` from `headers`.
    ///
    /// The XML location and file name casing come from the Doxyfile at
    /// `doxygen_config` (`OUTPUT_DIRECTORY`, `XML_OUTPUT`,
    /// `CASE_SENSE_NAMES`).
    pub fn build(
        &self,
        headers: impl Into<HeaderList>,
        component: &str,
        doxygen_config: impl AsRef<Path>,
        swig_dir: impl AsRef<Path>,
    ) -> Result<BuildReport> {
        let swig_dir = swig_dir.as_ref();
        let config = DoxygenConfig::from_file(doxygen_config.as_ref())?;
        let locator = XmlLocator::new(config.xml_dir()?, config.case_sense_names()?);
        let converter = DocConverter::new(self.renderer).with_policy(self.policy);

        let tmp_dir = fragment_dir(swig_dir, component);
        let headers: HeaderList = headers.into();
        let headers = headers.into_entries();

        let mut xml_files = 0;
        let mut summary = ConversionSummary::default();
        for header in &headers {
            let files = locator.locate(header)?;
            if files.is_empty() {
                tracing::debug!("No XML output found for {}", header);
            }
            for file in &files {
                tracing::debug!("Docstrings generation for {} from {}", header, file.display());
            }
            xml_files += files.len();
            summary.merge(converter.convert(&files, &tmp_dir)?);
        }

        ensure_dir(&tmp_dir)?;
        let output = output_file(swig_dir, component);
        let fragments_concatenated = concatenate_fragments(&tmp_dir, &output)?;

        tracing::info!(
            "Wrote {} ({} fragments from {} headers)",
            output.display(),
            fragments_concatenated,
            headers.len()
        );

        Ok(BuildReport {
            component: component.to_string(),
            output_file: output,
            headers: headers.len(),
            xml_files,
            fragments_written: summary.written.len(),
            fragments_concatenated,
            skipped: summary.skipped,
        })
    }
}

/// Build a component with the default doxy2swig converter, aborting on the
/// first conversion failure.
pub fn build_docstrings(
    headers: impl Into<HeaderList>,
    component: &str,
    doxygen_config: impl AsRef<Path>,
    swig_dir: impl AsRef<Path>,
) -> Result<BuildReport> {
    let renderer = CommandRenderer::default();
    DocstringBuilder::new(&renderer).build(headers, component, doxygen_config, swig_dir)
}

/// Fragment files in `dir`, sorted by name. Hidden files are ignored.
pub fn list_fragments(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = glob_in(dir, &format!("*.{}", FRAGMENT_EXTENSION));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut fragments = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        if path.is_file() {
            fragments.push(path);
        }
    }
    fragments.sort();
    Ok(fragments)
}

/// Concatenate every fragment of `dir` into `output`, truncating it first.
/// Returns the number of fragments copied.
pub fn concatenate_fragments(dir: &Path, output: &Path) -> Result<usize> {
    let fragments = list_fragments(dir)?;

    let mut writer = BufWriter::new(File::create(output)?);
    for fragment in &fragments {
        let mut reader = File::open(fragment)?;
        std::io::copy(&mut reader, &mut writer)?;
    }
    writer.flush()?;

    Ok(fragments.len())
}
