//! Renderers turn one Doxygen XML file into one SWIG docstring fragment.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DocstringError, Result};

/// Program run by [`CommandRenderer::default`]
pub const DEFAULT_CONVERTER: &str = "doxy2swig.py";

/// Converts a single XML file into a docstring fragment written to `output`
pub trait DocRenderer {
    fn render(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Rendering switches understood by doxy2swig
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include function signatures (`-f`)
    pub function_signature: bool,
    /// Include type information for arguments (`-t`)
    pub type_info: bool,
    /// Add a constructor list to class docstrings (`-c`)
    pub constructor_list: bool,
    /// Add an attribute list to class docstrings (`-a`)
    pub attribute_list: bool,
    /// Document overloaded functions (`-o`)
    pub overloaded_functions: bool,
    /// Wrap text at this width (`-w`)
    pub text_width: Option<usize>,
    /// Silence converter output (`-q`)
    pub quiet: bool,
}

impl RenderOptions {
    /// Command-line flags for these options
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        let switches = [
            (self.function_signature, "-f"),
            (self.type_info, "-t"),
            (self.constructor_list, "-c"),
            (self.attribute_list, "-a"),
            (self.overloaded_functions, "-o"),
        ];
        for (enabled, flag) in switches {
            if enabled {
                args.push(flag.to_string());
            }
        }
        if let Some(width) = self.text_width {
            args.push("-w".to_string());
            args.push(width.to_string());
        }
        if self.quiet {
            args.push("-q".to_string());
        }
        args
    }
}

/// Runs an external converter as `<program> [args] [flags] <input> <output>`
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    program: PathBuf,
    args: Vec<String>,
    options: RenderOptions,
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl CommandRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            options: RenderOptions::default(),
        }
    }

    /// Arguments placed before the option flags, e.g. a script path
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .args(self.options.to_args())
            .arg(input)
            .arg(output);
        cmd
    }
}

impl DocRenderer for CommandRenderer {
    fn render(&self, input: &Path, output: &Path) -> Result<()> {
        let result = self
            .command(input, output)
            .output()
            .map_err(|e| DocstringError::Conversion {
                input: input.to_path_buf(),
                reason: format!("failed to run {}: {}", self.program.display(), e),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(DocstringError::Conversion {
                input: input.to_path_buf(),
                reason: format!("{} ({})", result.status, stderr.trim()),
            });
        }

        Ok(())
    }
}
