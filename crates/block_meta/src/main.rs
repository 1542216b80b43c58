// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use block_meta::logging::{self, LoggingConfig};
use block_meta::utils::read_input;
use block_meta::{BlockDecoder, ChainInfoPreview};
use config::{Args, BlockMetaConfig, Command, check_preview_bytes};
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();

    let env_loaded = config::load_env_file(&args.env_file)?;
    let config = BlockMetaConfig::from_env().context("Failed to load configuration")?;
    logging::init_with_config(LoggingConfig::from(&config.log))?;

    tracing::debug!(
        env_file = %args.env_file,
        env_loaded,
        varint_width = %config.decoder.varint_width,
        "Configuration loaded"
    );

    match args.command {
        Command::Block { input } => {
            let bytes = read_input(&input.input, input.hex)?;
            let metadata = BlockDecoder::from_config(&config.decoder).extract(&bytes);
            print_json(&metadata, input.pretty)?;
        }
        Command::Info { input, prefix } => {
            let preview_bytes = match prefix {
                Some(prefix) => check_preview_bytes(prefix).context("Invalid --prefix")?,
                None => config.decoder.preview_bytes,
            };

            let bytes = read_input(&input.input, input.hex)?;
            let preview = ChainInfoPreview::new(&bytes, preview_bytes);
            print_json(&preview, input.pretty)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
