//! File name transforms matching Doxygen's XML naming.

use std::path::Path;

/// Replace each uppercase letter with `_` followed by its lowercase form.
///
/// Used to predict XML file names when Doxygen runs with
/// `CASE_SENSE_NAMES = NO`. A leading capital yields a leading underscore:
/// `TimeStepping` becomes `_time_stepping`.
pub fn replace_uppercase_letters(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Name stem Doxygen uses for a header's XML files.
///
/// Takes the file name up to its first `.`, doubles underscores, and
/// lowercases with [`replace_uppercase_letters`] unless names are
/// case sensitive.
pub fn xml_stem(header: &Path, case_sense_names: bool) -> String {
    let file_name = header
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();
    let escaped = base.replace('_', "__");

    if case_sense_names {
        escaped
    } else {
        replace_uppercase_letters(&escaped)
    }
}
