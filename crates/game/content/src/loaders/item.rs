//! Item catalog loader.

use std::path::Path;

use barter_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Returns definitions in file order. Duplicate ids are caught later,
    /// when the definitions become a [`barter_core::ItemCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use barter_core::ItemCategory;

    use super::*;

    #[test]
    fn perishable_defaults_to_false() {
        let items = ItemLoader::parse(
            r#"(items: [
                (id: "pot", name: "陶罐", category: tool, icon: "🏺", description: "", base_value: 20),
                (id: "fish", name: "鲜鱼", category: food, icon: "🐟", description: "", base_value: 10, perishable: true),
            ])"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, ItemCategory::Tool);
        assert!(!items[0].perishable);
        assert!(items[1].perishable);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let result = ItemLoader::parse(
            r#"(items: [(id: "gem", name: "宝石", category: jewel, icon: "", description: "", base_value: 1)])"#,
        );
        assert!(result.is_err());
    }
}
