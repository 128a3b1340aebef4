//! Doxygen configuration reader
//!
//! Reads the `KEY = value` lines of a Doxyfile into a map. Lines without an
//! `=` continue the value of the key defined just before them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DocstringError, Result};

pub const CASE_SENSE_NAMES: &str = "CASE_SENSE_NAMES";
pub const OUTPUT_DIRECTORY: &str = "OUTPUT_DIRECTORY";
pub const XML_OUTPUT: &str = "XML_OUTPUT";

/// Parsed Doxygen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DoxygenConfig {
    values: BTreeMap<String, String>,
}

impl DoxygenConfig {
    /// Read and parse a Doxyfile from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse Doxyfile content.
    ///
    /// Blank lines and `#` comments are skipped. Values keep the text right
    /// of the first `=` verbatim (after the physical line is trimmed), so
    /// `KEY = value` stores `" value"`. Continuation lines are appended with
    /// no separator. `KEY += value` appends to an existing value with a
    /// single space.
    pub fn parse(content: &str) -> Result<Self> {
        let mut values: BTreeMap<String, String> = BTreeMap::new();
        let mut last_key: Option<String> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((left, right)) = line.split_once('=') else {
                let key = last_key
                    .as_ref()
                    .ok_or(DocstringError::OrphanContinuation { line: idx + 1 })?;
                if let Some(value) = values.get_mut(key) {
                    value.push_str(line);
                }
                continue;
            };

            let left = left.trim_end();
            let (left, append) = match left.strip_suffix('+') {
                Some(stripped) => (stripped, true),
                None => (left, false),
            };
            let key = left.trim().to_string();

            let existing = values.get_mut(&key).filter(|_| append);
            if let Some(existing) = existing {
                existing.push(' ');
                existing.push_str(right.trim_start());
            } else {
                values.insert(key.clone(), right.to_string());
            }
            last_key = Some(key);
        }

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get), but a missing key is an error
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| DocstringError::MissingKey(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Whether Doxygen keeps the case of generated file names
    pub fn case_sense_names(&self) -> Result<bool> {
        Ok(self.require(CASE_SENSE_NAMES)?.contains("YES"))
    }

    /// Directory holding the generated XML (`OUTPUT_DIRECTORY`/`XML_OUTPUT`)
    pub fn xml_dir(&self) -> Result<PathBuf> {
        let output = self.require(OUTPUT_DIRECTORY)?.trim_start();
        let xml = self.require(XML_OUTPUT)?.trim_start();
        Ok(Path::new(output).join(xml))
    }
}
