// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod decoder;
mod error;
mod log;

pub use args::{Args, Command, InputArgs};
pub use decoder::{DecoderConfig, MAX_PREVIEW_BYTES, VarintWidth, check_preview_bytes};
pub use error::ConfigError;
pub use log::LogConfig;

use serde::Deserialize;
use std::path::Path;

/// Prefix shared by every environment variable read by [`BlockMetaConfig`].
pub const ENV_PREFIX: &str = "BLOCKMETA_";

#[derive(Debug, Clone, Default)]
pub struct BlockMetaConfig {
    pub log: LogConfig,
    pub decoder: DecoderConfig,
}

/// Flat view of the environment, envy cannot fill nested structs.
#[derive(Debug, Deserialize)]
struct EnvVars {
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,
    #[serde(default)]
    decoder_varint_width: VarintWidth,
    #[serde(default = "decoder::default_preview_bytes")]
    decoder_preview_bytes: usize,
}

impl From<EnvVars> for BlockMetaConfig {
    fn from(env: EnvVars) -> Self {
        Self {
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            decoder: DecoderConfig {
                varint_width: env.decoder_varint_width,
                preview_bytes: env.decoder_preview_bytes,
            },
        }
    }
}

impl BlockMetaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvVars>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Same as [`BlockMetaConfig::from_env`] but reads from the given pairs.
    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvVars>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        self.decoder.validate()?;
        Ok(())
    }
}

/// Load variables from a dotenv file into the process environment.
///
/// Returns `Ok(false)` when the file does not exist. Variables already set in
/// the environment are not overridden.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = BlockMetaConfig::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.decoder.varint_width, VarintWidth::Bits64);
        assert_eq!(config.decoder.preview_bytes, 32);
    }

    #[test]
    fn test_from_iter_empty_uses_defaults() {
        let config = BlockMetaConfig::from_iter(Vec::new()).unwrap();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
        assert!(!config.log.write);
        assert_eq!(config.log.write_max_files, 5);
        assert_eq!(config.decoder.varint_width, VarintWidth::Bits64);
        assert_eq!(config.decoder.preview_bytes, 32);
    }

    #[test]
    fn test_from_iter_reads_prefixed_values() {
        let config = BlockMetaConfig::from_iter(vars(&[
            ("BLOCKMETA_LOG_LEVEL", "debug"),
            ("BLOCKMETA_LOG_JSON", "true"),
            ("BLOCKMETA_LOG_WRITE", "true"),
            ("BLOCKMETA_LOG_WRITE_PATH", "/tmp/block-meta"),
            ("BLOCKMETA_LOG_WRITE_MAX_FILES", "3"),
            ("BLOCKMETA_DECODER_VARINT_WIDTH", "legacy32"),
            ("BLOCKMETA_DECODER_PREVIEW_BYTES", "16"),
            ("UNRELATED_VAR", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert!(config.log.write);
        assert_eq!(config.log.write_path, "/tmp/block-meta");
        assert_eq!(config.log.write_max_files, 3);
        assert_eq!(config.decoder.varint_width, VarintWidth::Legacy32);
        assert_eq!(config.decoder.preview_bytes, 16);
    }

    #[test]
    fn test_from_iter_rejects_invalid_level() {
        let result = BlockMetaConfig::from_iter(vars(&[("BLOCKMETA_LOG_LEVEL", "loud")]));
        assert!(matches!(result, Err(ConfigError::LogError(_))));
    }

    #[test]
    fn test_from_iter_rejects_invalid_width() {
        let result =
            BlockMetaConfig::from_iter(vars(&[("BLOCKMETA_DECODER_VARINT_WIDTH", "128")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_from_iter_rejects_zero_preview() {
        let result =
            BlockMetaConfig::from_iter(vars(&[("BLOCKMETA_DECODER_PREVIEW_BYTES", "0")]));
        assert!(matches!(result, Err(ConfigError::DecoderError(_))));
    }

    #[test]
    fn test_load_env_file_missing_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_env_file(dir.path().join("missing.env")).unwrap();
        assert!(!loaded);
    }

    #[test]
    #[serial]
    fn test_load_env_file_populates_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "BLOCKMETA_TEST_ONLY_MARKER=from-env-file").unwrap();

        let loaded = load_env_file(file.path()).unwrap();
        assert!(loaded);
        assert_eq!(
            std::env::var("BLOCKMETA_TEST_ONLY_MARKER").unwrap(),
            "from-env-file"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unknown_prefixed_vars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "BLOCKMETA_SOMETHING_ELSE=1").unwrap();
        load_env_file(file.path()).unwrap();

        assert!(BlockMetaConfig::from_env().is_ok());
    }
}
