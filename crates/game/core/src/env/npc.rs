//! NPC template definitions and oracle interface.
//!
//! An [`NpcTemplate`] is the static half of a trading partner: identity,
//! starting goods (as catalog ids), a single [`Want`] rule and scripted
//! [`Dialogue`]. Templates are spawned into [`crate::state::NpcState`] when a
//! session starts; only the spawned inventory changes during play.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::{ContentError, ItemCategory, ItemDefinition, ItemId};

/// Stable identifier of an NPC (e.g. `npc1`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NpcId(pub String);

impl NpcId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NpcId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single acceptance criterion of an NPC.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WantRule {
    /// Accepts any item whose display name equals this string.
    ItemName(String),
    /// Accepts any item of this category.
    Category(ItemCategory),
}

impl WantRule {
    pub fn accepts(&self, item: &ItemDefinition) -> bool {
        match self {
            WantRule::ItemName(name) => item.name == *name,
            WantRule::Category(category) => item.category == *category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Want {
    pub rule: WantRule,
    /// What the NPC says it is looking for.
    pub description: String,
}

impl Want {
    pub fn new(rule: WantRule, description: impl Into<String>) -> Self {
        Self {
            rule,
            description: description.into(),
        }
    }
}

/// Refusal lines keyed by item id or category name, with a mandatory default.
///
/// Serialized as a flat map in which `default` is an ordinary key; decoding a
/// map without it fails with [`ContentError::MissingDefaultRefusal`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<String, String>",
        into = "BTreeMap<String, String>"
    )
)]
pub struct RefusalTable {
    default: String,
    lines: BTreeMap<String, String>,
}

impl RefusalTable {
    pub const DEFAULT_KEY: &'static str = "default";

    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            lines: BTreeMap::new(),
        }
    }

    /// Adds a line for an item id (e.g. `grain`) or a category name (e.g. `food`).
    pub fn with_line(mut self, key: impl Into<String>, line: impl Into<String>) -> Self {
        self.lines.insert(key.into(), line.into());
        self
    }

    pub fn default_line(&self) -> &str {
        &self.default
    }

    /// Picks the line for an offered item: item id first, then category, then default.
    pub fn line_for(&self, offered: &ItemDefinition) -> &str {
        self.lines
            .get(offered.id.as_str())
            .or_else(|| self.lines.get(offered.category.as_str()))
            .unwrap_or(&self.default)
    }
}

impl TryFrom<BTreeMap<String, String>> for RefusalTable {
    type Error = ContentError;

    fn try_from(mut lines: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let default = lines
            .remove(Self::DEFAULT_KEY)
            .ok_or(ContentError::MissingDefaultRefusal)?;
        Ok(Self { default, lines })
    }
}

impl From<RefusalTable> for BTreeMap<String, String> {
    fn from(table: RefusalTable) -> Self {
        let mut lines = table.lines;
        lines.insert(RefusalTable::DEFAULT_KEY.to_owned(), table.default);
        lines
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialogue {
    /// Shown on first contact.
    pub greeting: String,
    /// Shown after an accepted trade.
    pub success: String,
    /// Static clue pointing at another NPC.
    pub hint: String,
    pub refusals: RefusalTable,
}

/// Static definition of a trading partner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcTemplate {
    pub id: NpcId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    /// Starting goods, as catalog ids in inventory order.
    pub inventory: Vec<ItemId>,
    pub wants: Want,
    pub dialogue: Dialogue,
}

/// Oracle providing the NPC roster.
pub trait NpcOracle: Send + Sync {
    fn template(&self, id: &NpcId) -> Option<&NpcTemplate>;

    /// All templates in roster order.
    fn roster(&self) -> &[NpcTemplate];
}

/// In-memory NPC roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NpcRoster {
    npcs: Vec<NpcTemplate>,
}

impl NpcRoster {
    /// Builds a roster, rejecting duplicate NPC ids.
    pub fn new(npcs: Vec<NpcTemplate>) -> Result<Self, ContentError> {
        let mut seen = BTreeSet::new();
        for npc in &npcs {
            if !seen.insert(&npc.id) {
                return Err(ContentError::DuplicateNpc {
                    npc: npc.id.clone(),
                });
            }
        }
        Ok(Self { npcs })
    }

    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }
}

impl NpcOracle for NpcRoster {
    fn template(&self, id: &NpcId) -> Option<&NpcTemplate> {
        self.npcs.iter().find(|npc| &npc.id == id)
    }

    fn roster(&self) -> &[NpcTemplate] {
        &self.npcs
    }
}
