use std::collections::VecDeque;
use std::fmt;

/// Unique identifier of one item copy held in an inventory.
///
/// Allocated by [`crate::state::GameState`] at creation time and kept when the
/// item changes hands, so two fish are always distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// In-game day counter. Starts at [`Day::FIRST`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Day(pub u32);

impl Day {
    pub const FIRST: Self = Self(1);

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Day {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameStatus {
    #[default]
    Playing,
    /// Terminal until the session is reset.
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Narrative log, newest entry first.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    /// A log holding a single line.
    pub fn seeded(line: impl Into<String>) -> Self {
        let mut history = Self::default();
        history.push(line);
        history
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
