pub mod fixtures;
pub mod utils;

pub use fixtures::{BlockFixture, FixtureLoader};
pub use utils::*;

/// Test configuration constants
pub mod constants {
    /// Directory under the crate root holding block fixtures
    pub const BLOCK_FIXTURES_DIR: &str = "tests/fixtures/blocks";
}
