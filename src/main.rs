//! # Auth Transcoder - Main Entry Point
//!
//! Command line front end for the transcoder:
//! - `to-legacy`: OAS authentication document → legacy API definition fields
//! - `to-oas`: legacy API definition → OAS authentication document
//! - `normalize`: legacy → OAS → legacy, yielding the canonical legacy form

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error, info};

use auth_transcoder::codec::{self, DocumentFormat};
use auth_transcoder::observability::init_logging;
use auth_transcoder::{ApiDefinition, Authentication, TranscoderConfig, TranscoderResult};

#[derive(Debug, Parser)]
#[command(name = "auth-transcoder", version, about = "Convert API authentication settings between the OAS and legacy schemas")]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(long, global = true, env = "TRANSCODER_CONFIG")]
    config: Option<PathBuf>,

    /// Output format; overrides the configuration file
    #[arg(long, global = true)]
    format: Option<DocumentFormat>,

    /// Write to this file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read an OAS authentication document and print the legacy definition
    ToLegacy { input: PathBuf },
    /// Read a legacy definition and print the OAS authentication document
    ToOas { input: PathBuf },
    /// Round-trip a legacy definition through the OAS schema
    Normalize { input: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match TranscoderConfig::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("auth-transcoder: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("auth-transcoder: {}", e);
        return ExitCode::FAILURE;
    }

    debug!(version = env!("CARGO_PKG_VERSION"), "starting");

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error_type = e.error_type(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: TranscoderConfig) -> TranscoderResult<()> {
    let format = cli.format.unwrap_or(config.output.format);
    let pretty = config.output.pretty;
    let output = cli.output.as_deref();

    match cli.command {
        Command::ToLegacy { input } => {
            let authentication: Authentication = codec::read_document(&input).await?;
            let api = authentication.to_legacy();
            info!(input = %input.display(), "converted OAS authentication to legacy definition");
            emit(&api, output, format, pretty).await
        }
        Command::ToOas { input } => {
            let api: ApiDefinition = codec::read_document(&input).await?;
            let authentication = Authentication::from_legacy(&api);
            info!(input = %input.display(), "converted legacy definition to OAS authentication");
            emit(&authentication, output, format, pretty).await
        }
        Command::Normalize { input } => {
            let api: ApiDefinition = codec::read_document(&input).await?;
            let normalized = Authentication::from_legacy(&api).to_legacy();
            if normalized != api {
                info!(input = %input.display(), "legacy definition changed during normalization");
            }
            emit(&normalized, output, format, pretty).await
        }
    }
}

async fn emit<T: Serialize>(
    value: &T,
    output: Option<&Path>,
    format: DocumentFormat,
    pretty: bool,
) -> TranscoderResult<()> {
    match output {
        Some(path) => codec::write_document(value, path, format, pretty).await,
        None => {
            println!("{}", codec::encode(value, format, pretty)?);
            Ok(())
        }
    }
}
