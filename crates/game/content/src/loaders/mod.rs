//! Content loaders for reading market data from files.
//!
//! Each loader parses one file format into barter-core types. The
//! `parse_*` functions work on in-memory text and back both the file loaders
//! and the embedded built-in market.

pub mod config;
pub mod factory;
pub mod item;
pub mod npc;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use npc::NpcLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
