//! Subcommand implementations.

mod play;
mod snapshot;
mod walkthrough;

pub use play::Play;
pub use snapshot::Snapshot;
pub use walkthrough::Walkthrough;
