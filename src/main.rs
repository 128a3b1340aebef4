mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doxy_docstrings::convert::RenderOptions;

use crate::cli::{BuildArgs, Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doxy_docstrings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            component,
            doxygen_config,
            output_dir,
            headers,
            converter,
            converter_args,
            function_signature,
            type_info,
            constructor_list,
            attribute_list,
            overloaded_functions,
            text_width,
            quiet_converter,
            keep_going,
            format,
        } => {
            cli::build(BuildArgs {
                component,
                doxygen_config,
                output_dir,
                headers,
                converter,
                converter_args,
                render: RenderOptions {
                    function_signature,
                    type_info,
                    constructor_list,
                    attribute_list,
                    overloaded_functions,
                    text_width,
                    quiet: quiet_converter,
                },
                keep_going,
                format,
            })?;
        }
        Commands::Locate {
            header,
            doxygen_config,
            xml_dir,
            case_insensitive,
        } => {
            cli::locate(
                &header,
                doxygen_config.as_deref(),
                xml_dir.as_deref(),
                case_insensitive,
            )?;
        }
        Commands::Config { path, key, format } => {
            cli::show_config(&path, key.as_deref(), &format)?;
        }
    }

    Ok(())
}
