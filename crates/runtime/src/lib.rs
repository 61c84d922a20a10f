//! Runtime orchestration for a barter session.
//!
//! This crate wires loaded market content to the deterministic engine.
//! Consumers embed [`GameSession`] to route player intents, read the current
//! state, and export JSON snapshots.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session owner and its intent methods
//! - [`error`] exposes the error type returned by every session call
pub mod error;
pub mod session;

pub use error::{Result, SessionError};
pub use session::GameSession;
