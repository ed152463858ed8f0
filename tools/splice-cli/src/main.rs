//! splice - inspect and edit .splice drum pattern files
//!
//! # Commands
//!
//! - `splice print <FILE>...` - Print patterns in their textual form
//! - `splice check <FILE>...` - Verify decode/encode round-trips byte-for-byte
//! - `splice json <FILE>` - Dump a pattern as JSON
//! - `splice cowbell <INPUT> -o <OUTPUT>` - Fill a track with steps and save
//!
//! Codec options come from `splice.toml` (see [`config`]) and can be
//! overridden with `--tolerant`, `--u8-length` and `--short-names`.

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use splice_drum::fs::{decode_file, encode_file, read_splice_bytes};
use splice_drum::{Codec, CodecOptions, render_text};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let options = cli.codec_options(config.codec);
    tracing::debug!("Codec options: {:?}", options);

    match cli.command {
        Commands::Print { files } => {
            for file in &files {
                let pattern = decode_file(file, &options)?;
                if files.len() > 1 {
                    println!("{}:", file.display());
                }
                print!("{}", render_text(&pattern));
            }
        }

        Commands::Check { files } => check_files(&files, &options)?,

        Commands::Json { file } => {
            let pattern = decode_file(&file, &options)?;
            let json =
                serde_json::to_string_pretty(&pattern).context("Failed to serialize pattern")?;
            println!("{json}");
        }

        Commands::Cowbell {
            input,
            output,
            track,
        } => {
            tracing::info!("Filling {:?} in {:?} -> {:?}", track, input, output);
            let mut pattern = decode_file(&input, &options)?;
            let Some(target) = pattern.track_mut(&track) else {
                anyhow::bail!("No track named {:?} in {}", track, input.display());
            };
            target.set_all_steps(true);
            encode_file(&output, &pattern, &options)?;
            tracing::info!("Done!");
        }
    }

    Ok(())
}

/// Decode and re-encode every file, comparing bytes
fn check_files(files: &[PathBuf], options: &CodecOptions) -> Result<()> {
    let mut failures = 0;
    for file in files {
        match check_file(file, options) {
            Ok(()) => println!("ok       {}", file.display()),
            Err(err) => {
                failures += 1;
                println!("FAILED   {}", file.display());
                tracing::error!("{:#}", err);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} files failed the round-trip check", failures, files.len());
    }
    Ok(())
}

fn check_file(path: &Path, options: &CodecOptions) -> Result<()> {
    let codec = Codec::new(*options);
    let data = read_splice_bytes(path)?;
    let pattern = codec
        .decode(&data)
        .with_context(|| format!("Failed to decode pattern: {}", path.display()))?;
    let encoded = codec
        .encode(&pattern)
        .with_context(|| format!("Failed to re-encode pattern: {}", path.display()))?;

    if encoded != data {
        let first = encoded
            .iter()
            .zip(&data)
            .position(|(a, b)| a != b)
            .unwrap_or(encoded.len().min(data.len()));
        anyhow::bail!(
            "{}: re-encoded bytes differ at offset {} ({} bytes in, {} bytes out)",
            path.display(),
            first,
            data.len(),
            encoded.len()
        );
    }

    tracing::debug!(
        "{}: {} tracks, {} trailing bytes",
        path.display(),
        pattern.tracks.len(),
        pattern.trailing.len()
    );
    Ok(())
}
