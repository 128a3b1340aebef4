//! Locating Doxygen XML output for headers.

pub mod names;
pub mod xml;

use std::path::Path;

use glob::Pattern;

pub use names::{replace_uppercase_letters, xml_stem};
pub use xml::XmlLocator;

/// Glob pattern matching `name` inside `dir`. The directory part is escaped;
/// an empty directory yields a pattern relative to the working directory.
pub fn glob_in(dir: &Path, name: &str) -> String {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    Path::new(&escaped).join(name).to_string_lossy().to_string()
}
