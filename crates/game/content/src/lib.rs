//! Data-driven market content and loaders.
//!
//! This crate houses the built-in market and provides loaders for RON/TOML
//! data files:
//! - Item catalog (`items.ron`)
//! - NPC roster with wants and dialogue (`npcs.ron`)
//! - Game configuration (`config.toml`)
//!
//! Content is consumed through barter-core oracles and never appears in game
//! state except as spawned copies.

#[cfg(feature = "loaders")]
pub mod loaders;
#[cfg(feature = "loaders")]
mod market;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, LoadResult, NpcLoader};
#[cfg(feature = "loaders")]
pub use market::MarketContent;
