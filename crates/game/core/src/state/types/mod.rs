//! State type definitions.
//!
//! - [`common`]: identifiers, day counter, status and history log
//! - [`item`]: item instances and freshness
//! - [`inventory`]: ordered instance collections
//! - [`npc`]: spawned NPCs
mod common;
mod inventory;
mod item;
mod npc;

pub use common::{Day, GameStatus, History, InstanceId};
pub use inventory::Inventory;
pub use item::{Freshness, ItemError, ItemInstance};
pub use npc::NpcState;
