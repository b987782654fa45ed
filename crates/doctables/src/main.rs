//! Command-line entry point.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use doctables::{
    activation_script, compile, write_activation_script, ActivationConfig, DatatablesConfig,
    DirectiveFormat, SelectorOptions, TableDirective,
};

#[derive(Parser)]
#[command(
    name = "doctables",
    about = "DataTables build extension for documentation sites",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the activation asset under the build output directory.
    Build {
        /// Build output directory; the asset lands under its _static/.
        #[arg(long)]
        outdir: PathBuf,
        /// Configuration file (.json, .yaml or .yml).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the compiled activation script to stdout.
    Render {
        /// Configuration file (.json, .yaml or .yml).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Wrap the output in an inline <script> element.
        #[arg(long)]
        script_tag: bool,
        /// Emit only the defaults-merge call, no activation.
        #[arg(long)]
        defaults_only: bool,
    },
    /// Render one directive's inline snippet.
    Snippet {
        /// Selector whose tables receive the options.
        #[arg(long)]
        selector: String,
        /// Content format: json, yaml or js.
        #[arg(long)]
        format: String,
        /// Read directive content from a file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Configuration file (.json, .yaml or .yml).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build { outdir, config } => {
            let config = load_config(config)?;
            let path = write_activation_script(&config, &outdir)?;
            println!("{}", path.display());
        }
        Command::Render {
            config,
            script_tag,
            defaults_only,
        } => {
            let config = load_config(config)?;
            let script = if script_tag || defaults_only {
                let activation = ActivationConfig {
                    version: config.version.clone(),
                    table_class: config.table_class.clone(),
                    options: config.options.clone(),
                    selector_options: SelectorOptions::new(),
                    defaults_only,
                    script_tag,
                };
                compile(&activation)?
            } else {
                activation_script(&config)?
            };
            print!("{script}");
        }
        Command::Snippet {
            selector,
            format,
            file,
            config,
        } => {
            let config = load_config(config)?;
            let format = DirectiveFormat::from_name(&format)?;
            let content = match &file {
                Some(_) => String::new(),
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading directive content from stdin")?;
                    buf
                }
            };
            let mut directive = TableDirective::new(format, selector, content);
            directive.file = file;
            print!("{}", directive.render(&config)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<DatatablesConfig> {
    match path {
        Some(path) => DatatablesConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(DatatablesConfig::default()),
    }
}
