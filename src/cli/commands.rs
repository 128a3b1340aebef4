use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use doxy_docstrings::build::DocstringBuilder;
use doxy_docstrings::config::DoxygenConfig;
use doxy_docstrings::convert::{CommandRenderer, FailurePolicy, RenderOptions, DEFAULT_CONVERTER};
use doxy_docstrings::error::{DocstringError, Result};
use doxy_docstrings::locator::XmlLocator;

#[derive(Parser)]
#[command(name = "doxy-docstrings")]
#[command(about = "Generate SWIG docstring files from Doxygen XML output")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Build kernel docstrings from two headers
    doxy-docstrings build --component kernel --doxygen-config build/Doxyfile \
        --output-dir build/swig --headers "Kernel.hpp;Model.hpp"

    # Use a converter script through an interpreter
    doxy-docstrings build --component numerics --doxygen-config Doxyfile \
        --output-dir swig --headers "fc3d_driver.h" \
        --converter python3 --converter-arg share/doxy2swig.py

    # Show the XML files found for a header
    doxy-docstrings locate TimeStepping.hpp --doxygen-config build/Doxyfile

    # Print one Doxyfile value
    doxy-docstrings config build/Doxyfile --key XML_OUTPUT
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the docstring file of a component
    Build {
        /// Component name (kernel, numerics, ...)
        #[arg(long)]
        component: String,

        /// Path to the Doxygen configuration file
        #[arg(long)]
        doxygen_config: PathBuf,

        /// Directory receiving <component>-docstrings.i
        #[arg(long)]
        output_dir: PathBuf,

        /// Semicolon separated header list
        #[arg(long, default_value = "")]
        headers: String,

        /// Converter program
        #[arg(long, default_value = DEFAULT_CONVERTER)]
        converter: PathBuf,

        /// Extra argument passed to the converter before its flags (repeatable)
        #[arg(long = "converter-arg", allow_hyphen_values = true)]
        converter_args: Vec<String>,

        /// Include function signatures
        #[arg(long)]
        function_signature: bool,

        /// Include argument type information
        #[arg(long)]
        type_info: bool,

        /// Add constructor lists to class docstrings
        #[arg(long)]
        constructor_list: bool,

        /// Add attribute lists to class docstrings
        #[arg(long)]
        attribute_list: bool,

        /// Document overloaded functions
        #[arg(long)]
        overloaded_functions: bool,

        /// Wrap docstrings at this width
        #[arg(long)]
        text_width: Option<usize>,

        /// Silence converter output
        #[arg(long)]
        quiet_converter: bool,

        /// Skip files that fail to convert instead of aborting
        #[arg(long)]
        keep_going: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the XML files generated for a header
    Locate {
        /// Header file name
        header: PathBuf,

        /// Doxygen configuration providing the XML directory and casing
        #[arg(long, conflicts_with = "xml_dir")]
        doxygen_config: Option<PathBuf>,

        /// XML directory to search
        #[arg(long, required_unless_present = "doxygen_config")]
        xml_dir: Option<PathBuf>,

        /// XML file names were generated with CASE_SENSE_NAMES = NO
        #[arg(long, requires = "xml_dir")]
        case_insensitive: bool,
    },

    /// Print a parsed Doxygen configuration
    Config {
        /// Path to the Doxygen configuration file
        path: PathBuf,

        /// Print only this key
        #[arg(long)]
        key: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Options of the `build` command
pub struct BuildArgs {
    pub component: String,
    pub doxygen_config: PathBuf,
    pub output_dir: PathBuf,
    pub headers: String,
    pub converter: PathBuf,
    pub converter_args: Vec<String>,
    pub render: RenderOptions,
    pub keep_going: bool,
    pub format: String,
}

pub fn build(args: BuildArgs) -> Result<()> {
    let renderer = CommandRenderer::new(&args.converter)
        .with_args(args.converter_args)
        .with_options(args.render);
    let policy = if args.keep_going {
        FailurePolicy::Skip
    } else {
        FailurePolicy::Abort
    };

    let report = DocstringBuilder::new(&renderer).with_policy(policy).build(
        args.headers.as_str(),
        &args.component,
        &args.doxygen_config,
        &args.output_dir,
    )?;

    if args.format == "json" {
        println!("{}", to_json(&report)?);
        return Ok(());
    }

    for skipped in &report.skipped {
        eprintln!("Skipped {}: {}", skipped.input.display(), skipped.reason);
    }
    println!(
        "Generates file {} for docstrings in swig.",
        report.output_file.display()
    );
    Ok(())
}

pub fn locate(
    header: &Path,
    doxygen_config: Option<&Path>,
    xml_dir: Option<&Path>,
    case_insensitive: bool,
) -> Result<()> {
    let locator = match (doxygen_config, xml_dir) {
        (Some(config_path), _) => {
            let config = DoxygenConfig::from_file(config_path)?;
            XmlLocator::new(config.xml_dir()?, config.case_sense_names()?)
        }
        (None, Some(dir)) => XmlLocator::new(dir, !case_insensitive),
        (None, None) => return Err(DocstringError::MissingKey("XML_OUTPUT".to_string())),
    };

    let files = locator.locate(header)?;
    if files.is_empty() {
        eprintln!(
            "No XML files for {} in {}",
            header.display(),
            locator.xml_dir().display()
        );
    }
    for file in files {
        println!("{}", file.display());
    }
    Ok(())
}

pub fn show_config(path: &Path, key: Option<&str>, format: &str) -> Result<()> {
    let config = DoxygenConfig::from_file(path)?;

    if let Some(key) = key {
        let value = config.require(key)?;
        if format == "json" {
            println!("{}", to_json(&value)?);
        } else {
            println!("{}", value.trim_start());
        }
        return Ok(());
    }

    if format == "json" {
        println!("{}", to_json(&config)?);
    } else {
        for key in config.keys() {
            println!("{} ={}", key, config.get(key).unwrap_or_default());
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
