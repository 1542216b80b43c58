//! Script to regenerate the expected records of the block fixtures
//! Each fixture's rawHex is decoded with the current decoder and the result is written back as `expected`

use anyhow::{Context, Result};
use integration_tests::{FixtureLoader, compare_json};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Optional argument: a single fixture file name to update
    let only: Option<String> = env::args().nth(1);

    println!("{}", "=".repeat(60));
    println!("Fixture Updater");
    println!("{}", "=".repeat(60));
    println!();

    let loader = FixtureLoader::blocks();
    println!("Fixtures directory: {:?}", loader.fixtures_dir());
    println!();

    let mut changed = 0;
    let mut total = 0;
    for path in loader.list()? {
        let file_name = path.file_name().map(|f| f.to_string_lossy().to_string());
        if only.is_some() && file_name != only {
            continue;
        }

        total += 1;
        if update_fixture(&loader, &path)? {
            changed += 1;
        }
    }

    if total == 0 {
        anyhow::bail!("No fixtures matched in {:?}", loader.fixtures_dir());
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("✓ Fixture update completed: {} of {} changed", changed, total);
    println!("{}", "=".repeat(60));

    Ok(())
}

fn update_fixture(loader: &FixtureLoader, path: &Path) -> Result<bool> {
    let mut fixture = loader.load_block(path)?;
    let actual = fixture
        .decode()
        .context(format!("Failed to decode fixture: {:?}", path))?;

    if compare_json(&actual, &fixture.expected, &[])?.is_match() {
        println!("  = {:?}", path.file_name().unwrap_or_default());
        return Ok(false);
    }

    tracing::info!(fixture = ?path, "Expected record changed");
    fixture.expected = actual;

    let json_string = serde_json::to_string_pretty(&fixture)?;
    std::fs::write(path, format!("{}\n", json_string))
        .context(format!("Failed to write fixture: {:?}", path))?;

    println!("  ✓ {:?} ({} bytes)", path.file_name().unwrap_or_default(), json_string.len());

    Ok(true)
}
