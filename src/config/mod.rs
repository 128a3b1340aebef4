//! Build inputs: Doxygen configuration and header lists.

pub mod doxyfile;
pub mod list;

pub use doxyfile::DoxygenConfig;
pub use list::{parse_list, HeaderList, LIST_SEPARATOR};
