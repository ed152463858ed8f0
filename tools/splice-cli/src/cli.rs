//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use splice_drum::{BodyLengthWidth, CodecOptions, NameLengthWidth, StepMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splice")]
#[command(about = "Inspect and edit .splice drum pattern files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./splice.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Accept any non-zero step byte as "on"
    #[arg(long, global = true)]
    pub tolerant: bool,

    /// Read and write the one-byte body length of the original files
    #[arg(long, global = true)]
    pub u8_length: bool,

    /// Track names carry a one-byte length prefix
    #[arg(long, global = true)]
    pub short_names: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print patterns in their textual form
    Print {
        /// .splice files to print
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check that files decode and re-encode to identical bytes
    Check {
        /// .splice files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a pattern as JSON
    Json {
        /// .splice file to dump
        file: PathBuf,
    },

    /// Turn every step of a track on and write the result
    Cowbell {
        /// Input .splice file
        input: PathBuf,

        /// Output .splice file
        #[arg(short, long)]
        output: PathBuf,

        /// Name of the track to fill
        #[arg(short, long, default_value = "cowbell")]
        track: String,
    },
}

impl Cli {
    /// Apply command-line switches on top of the configured options
    pub fn codec_options(&self, configured: CodecOptions) -> CodecOptions {
        let mut options = configured;
        if self.tolerant {
            options = options.with_steps(StepMode::Tolerant);
        }
        if self.u8_length {
            options = options.with_body_length(BodyLengthWidth::U8);
        }
        if self.short_names {
            options = options.with_name_length(NameLengthWidth::U8);
        }
        options
    }
}
