//! NPC roster loader.

use std::path::Path;

use barter_core::NpcTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// NPC roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcRosterFile {
    pub npcs: Vec<NpcTemplate>,
}

/// Loader for NPC templates from RON files.
pub struct NpcLoader;

impl NpcLoader {
    /// Load NPC templates from a RON file, in roster order.
    pub fn load(path: &Path) -> LoadResult<Vec<NpcTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<NpcTemplate>> {
        let roster: NpcRosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC roster RON: {}", e))?;

        Ok(roster.npcs)
    }
}

#[cfg(test)]
mod tests {
    use barter_core::{ItemCategory, ItemDefinition, WantRule};

    use super::*;

    const HERMIT: &str = r#"(npcs: [(
        id: "hermit",
        name: "隐士",
        role: "修行者",
        avatar: "🧙",
        inventory: ["herbs"],
        wants: (rule: Category(luxury), description: "我喜欢好看的东西。"),
        dialogue: (
            greeting: "安静。",
            success: "好。",
            hint: "去海边看看。",
            refusals: {"default": "不要。", "food": "我辟谷。"},
        ),
    )])"#;

    #[test]
    fn parses_category_wants_and_refusals() {
        let npcs = NpcLoader::parse(HERMIT).unwrap();
        let hermit = &npcs[0];

        assert_eq!(hermit.wants.rule, WantRule::Category(ItemCategory::Luxury));
        let bread = ItemDefinition::new("bread", "面包", ItemCategory::Food);
        let axe = ItemDefinition::new("axe", "石斧", ItemCategory::Tool);
        assert_eq!(hermit.dialogue.refusals.line_for(&bread), "我辟谷。");
        assert_eq!(hermit.dialogue.refusals.line_for(&axe), "不要。");
    }

    #[test]
    fn refusals_require_a_default() {
        let without_default = HERMIT.replace(r#""default": "不要。", "#, "");
        let error = NpcLoader::parse(&without_default).unwrap_err();

        assert!(error.to_string().contains("default"), "{error}");
    }
}
