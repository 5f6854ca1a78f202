//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::file_metadata_adapter::FileMetadataAdapter;
#[cfg(feature = "json")]
use crate::adapters::json_metadata_adapter::JsonMetadataAdapter;
use crate::domain::config_key::ConfigKey;
use crate::domain::config_validation::check_metadata;
use crate::domain::environment::Environment;
use crate::domain::error::AppEnvError;
use crate::logging;
use crate::ports::metadata_port::MetadataPort;

#[derive(Parser, Debug)]
#[command(name = "appenv", about = "Read application configuration from bundle metadata")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a single configuration value
    Get {
        key: String,
        #[arg(short, long)]
        metadata: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<MetadataFormat>,
    },
    /// Verify every configuration key resolves to a string
    Check {
        #[arg(short, long)]
        metadata: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<MetadataFormat>,
    },
    /// List recognized configuration keys
    Keys,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    Ini,
    Json,
}

impl MetadataFormat {
    /// Pick the format from the file extension; anything but `.json` is INI.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => MetadataFormat::Json,
            _ => MetadataFormat::Ini,
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    logging::init(cli.verbose);
    let stdout = std::io::stdout();
    let result = execute(cli.command, &mut stdout.lock());
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Run a command, writing normal output to `out`.
pub fn execute(command: Command, out: &mut dyn Write) -> Result<ExitCode, AppEnvError> {
    match command {
        Command::Get {
            key,
            metadata,
            format,
        } => {
            let key: ConfigKey = key.parse()?;
            let store = load_metadata(&metadata, format)?;
            let value = Environment::new(store.as_ref()).configuration(key)?;
            writeln!(out, "{value}")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { metadata, format } => {
            let store = load_metadata(&metadata, format)?;
            run_check(store.as_ref(), out)
        }
        Command::Keys => {
            for key in ConfigKey::ALL {
                writeln!(out, "{}", key.identifier())?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(store: &dyn MetadataPort, out: &mut dyn Write) -> Result<ExitCode, AppEnvError> {
    let problems = check_metadata(store);
    let Some(first) = problems.first() else {
        writeln!(out, "ok: {} keys resolved", ConfigKey::ALL.len())?;
        return Ok(ExitCode::SUCCESS);
    };
    for problem in &problems {
        eprintln!("error: {problem}");
    }
    Ok(first.into())
}

pub fn load_metadata(
    path: &Path,
    format: Option<MetadataFormat>,
) -> Result<Box<dyn MetadataPort>, AppEnvError> {
    let format = format.unwrap_or_else(|| MetadataFormat::detect(path));
    tracing::info!(path = %path.display(), ?format, "loading metadata");
    match format {
        MetadataFormat::Ini => Ok(Box::new(FileMetadataAdapter::from_file(path)?)),
        #[cfg(feature = "json")]
        MetadataFormat::Json => Ok(Box::new(JsonMetadataAdapter::from_file(path)?)),
        #[cfg(not(feature = "json"))]
        MetadataFormat::Json => Err(AppEnvError::UnknownFormat {
            name: "json".to_string(),
        }),
    }
}
