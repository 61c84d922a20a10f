use std::collections::BTreeSet;
use std::fmt;

use super::ContentError;

/// Stable catalog identifier of an item template (e.g. `fish`, `axe`).
///
/// Distinct from [`crate::state::InstanceId`], which names one concrete copy
/// held in an inventory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad item category used by category-based want rules and refusal lookups.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemCategory {
    Food,
    Tool,
    Luxury,
    Material,
}

impl ItemCategory {
    /// Key under which refusal lines for this category are stored.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Item template from the catalog. Inventories hold
/// [`crate::state::ItemInstance`] copies created by [`ItemDefinition::instantiate`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    /// Display name. Name-based want rules compare against this.
    pub name: String,
    pub category: ItemCategory,
    pub icon: String,
    pub description: String,
    /// Nominal worth. No rule reads it.
    pub base_value: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub perishable: bool,
}

impl ItemDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            category,
            icon: String::new(),
            description: String::new(),
            base_value: 0,
            perishable: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_base_value(mut self, base_value: u32) -> Self {
        self.base_value = base_value;
        self
    }

    pub fn perishable(mut self) -> Self {
        self.perishable = true;
        self
    }
}

pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: &ItemId) -> Option<&ItemDefinition>;

    /// Returns all item definitions available in this oracle, in catalog order.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// In-memory item catalog keyed by [`ItemId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<ItemDefinition>) -> Result<Self, ContentError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(ContentError::DuplicateItem {
                    item: item.id.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn category_keys_are_lowercase() {
        assert_eq!(ItemCategory::Material.as_str(), "material");
        assert_eq!(ItemCategory::from_str("luxury"), Ok(ItemCategory::Luxury));
        assert_eq!(ItemCategory::Food.to_string(), "food");
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let result = ItemCatalog::new(vec![
            ItemDefinition::new("fish", "鲜鱼", ItemCategory::Food),
            ItemDefinition::new("fish", "咸鱼", ItemCategory::Food),
        ]);

        assert_eq!(
            result,
            Err(ContentError::DuplicateItem {
                item: ItemId::from("fish")
            })
        );
    }

    #[test]
    fn catalog_looks_up_by_id() {
        let catalog = ItemCatalog::new(vec![
            ItemDefinition::new("wood", "木材", ItemCategory::Material),
            ItemDefinition::new("axe", "石斧", ItemCategory::Tool),
        ])
        .unwrap();

        let axe = catalog.definition(&ItemId::from("axe")).unwrap();
        assert_eq!(axe.name, "石斧");
        assert!(catalog.definition(&ItemId::from("pot")).is_none());
        assert_eq!(catalog.len(), 2);
    }
}
