//! Client configuration from the environment.
use std::env;
use std::path::PathBuf;

/// Settings that can come from the environment (or `.env`).
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Content directory; `None` means the built-in market.
    pub data_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BARTER_DATA_DIR` - directory holding `config.toml`, `items.ron`, `npcs.ron`
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("BARTER_DATA_DIR"),
        }
    }

    /// A command-line value wins over the environment.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())?
        .parse()
        .ok()
}
