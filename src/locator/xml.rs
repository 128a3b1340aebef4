use std::path::{Path, PathBuf};

use glob::Pattern;

use super::glob_in;
use super::names::xml_stem;
use crate::error::Result;

/// Finds the Doxygen XML files generated for a header
pub struct XmlLocator {
    xml_dir: PathBuf,
    case_sense_names: bool,
}

impl XmlLocator {
    pub fn new(xml_dir: impl Into<PathBuf>, case_sense_names: bool) -> Self {
        Self {
            xml_dir: xml_dir.into(),
            case_sense_names,
        }
    }

    pub fn xml_dir(&self) -> &Path {
        &self.xml_dir
    }

    /// Glob patterns for `header`: class, struct, then header file output.
    pub fn patterns(&self, header: &Path) -> [String; 3] {
        let stem = Pattern::escape(&xml_stem(header, self.case_sense_names));
        let join = |name: String| glob_in(&self.xml_dir, &name);

        [
            join(format!("*class{}.xml", stem)),
            join(format!("*struct{}.xml", stem)),
            join(format!("{}_8h*.xml", stem)),
        ]
    }

    /// Locate every XML file for `header`.
    ///
    /// Class matches come first, then struct matches, then header matches;
    /// each group is sorted by path. No match is not an error.
    pub fn locate(&self, header: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for pattern in self.patterns(header.as_ref()) {
            let mut group = Vec::new();
            for entry in glob::glob(&pattern)? {
                let path = entry?;
                if path.is_file() {
                    group.push(path);
                }
            }
            group.sort();
            files.extend(group);
        }

        Ok(files)
    }
}
