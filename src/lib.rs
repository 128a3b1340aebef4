pub mod build;
pub mod config;
pub mod convert;
pub mod error;
pub mod locator;

pub use build::{build_docstrings, BuildReport, DocstringBuilder};
pub use config::{parse_list, DoxygenConfig, HeaderList};
pub use convert::{
    CommandRenderer, ConversionSummary, DocConverter, DocRenderer, FailurePolicy, RenderOptions,
};
pub use error::{DocstringError, Result};
pub use locator::{replace_uppercase_letters, XmlLocator};
