// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.mainnet)
    #[arg(short, long, default_value = ".env", global = true)]
    pub env_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a raw block and print its metadata as JSON
    Block {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print a hex preview of a chain info blob
    Info {
        #[command(flatten)]
        input: InputArgs,

        /// Number of leading bytes to preview (defaults to BLOCKMETA_DECODER_PREVIEW_BYTES)
        #[arg(short, long)]
        prefix: Option<usize>,
    },
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file, or `-` for stdin
    pub input: PathBuf,

    /// Treat the input as hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
