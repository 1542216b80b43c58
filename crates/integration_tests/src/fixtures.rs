use crate::constants::BLOCK_FIXTURES_DIR;
use anyhow::{Context, Result};
use block_meta::BlockDecoder;
use block_meta::utils::parse_hex_input;
use config::VarintWidth;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A raw block and the metadata record expected from decoding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockFixture {
    pub description: String,
    pub raw_hex: String,
    /// Varint width to decode with, `64` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub varint_width: Option<String>,
    pub expected: Value,
}

impl BlockFixture {
    pub fn bytes(&self) -> Result<Vec<u8>> {
        parse_hex_input(&self.raw_hex).context("Fixture rawHex is not valid hex")
    }

    pub fn width(&self) -> Result<VarintWidth> {
        match &self.varint_width {
            Some(width) => Ok(width.parse()?),
            None => Ok(VarintWidth::default()),
        }
    }

    /// Decode `raw_hex` and return the record as JSON.
    pub fn decode(&self) -> Result<Value> {
        let bytes = self.bytes()?;
        let metadata = BlockDecoder::new(self.width()?).extract(&bytes);
        Ok(serde_json::to_value(&metadata)?)
    }
}

pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

impl FixtureLoader {
    /// Create a new fixture loader
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    /// Loader over the block fixtures shipped with this crate
    pub fn blocks() -> Self {
        Self::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(BLOCK_FIXTURES_DIR))
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        if path.as_ref().is_absolute() {
            path.as_ref().to_path_buf()
        } else {
            self.fixtures_dir.join(path.as_ref())
        }
    }

    /// Load a JSON fixture file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Value> {
        let full_path = self.resolve(path);

        let content = std::fs::read_to_string(&full_path)
            .context(format!("Failed to read fixture file: {:?}", full_path))?;

        let json: Value = serde_json::from_str(&content)
            .context(format!("Failed to parse JSON fixture: {:?}", full_path))?;

        Ok(json)
    }

    /// Load a block fixture file
    pub fn load_block(&self, path: impl AsRef<Path>) -> Result<BlockFixture> {
        let full_path = self.resolve(path);
        let json = self.load(&full_path)?;
        serde_json::from_value(json)
            .context(format!("Fixture has unexpected shape: {:?}", full_path))
    }

    /// All `.json` files in the fixtures directory, sorted by name
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.fixtures_dir).context(format!(
            "Failed to read fixtures directory: {:?}",
            self.fixtures_dir
        ))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Check if a fixture file exists
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).exists()
    }

    /// Get the fixtures directory path
    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }
}
