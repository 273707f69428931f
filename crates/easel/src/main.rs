//! Easel command-line interface.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, GenerateOptions};
use easel::{EaselConfig, EnvCredentials};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    easel::telemetry::init_console_telemetry(cli.verbose)?;

    let credentials = EnvCredentials::default();
    let result = run(cli, &credentials).await;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            cli::report_failure(e.as_ref(), &credentials).await;
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(cli: Cli, credentials: &EnvCredentials) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Key = cli.command {
        return cli::check_key(credentials).await;
    }

    let config = match &cli.config {
        Some(path) => EaselConfig::from_file(path)?,
        None => EaselConfig::load()?,
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Cancelling...");
            on_interrupt.cancel();
        }
    });

    match cli.command {
        Commands::Generate {
            prompt,
            script,
            slides,
            thinking,
            search,
            out,
        } => {
            let options = GenerateOptions {
                prompt,
                script,
                slides,
                thinking,
                search,
                out,
            };
            cli::run_generate(options, config, cancel).await
        }
        Commands::Image {
            prompt,
            aspect_ratio,
            out,
        } => cli::run_image(prompt, aspect_ratio, out, config).await,
        Commands::Edit {
            instruction,
            input,
            manifest,
            slide,
            out,
        } => cli::run_edit(instruction, input, manifest, slide, out, config).await,
        Commands::Video {
            prompt,
            aspect_ratio,
            image,
            out,
        } => cli::run_video(prompt, aspect_ratio, image, out, config, cancel).await,
        Commands::Key => cli::check_key(credentials).await,
    }
}
