//! Shared fixtures for unit tests: a two-NPC slice of the market.

use crate::config::GameConfig;
use crate::env::{
    Dialogue, GameEnv, ItemCatalog, ItemCategory, ItemDefinition, ItemId, NpcId, NpcRoster,
    NpcTemplate, RefusalTable, Want, WantRule,
};

pub fn fish() -> ItemDefinition {
    ItemDefinition::new("fish", "鲜鱼", ItemCategory::Food)
        .with_base_value(10)
        .perishable()
}

pub fn grain() -> ItemDefinition {
    ItemDefinition::new("grain", "谷物", ItemCategory::Food).with_base_value(15)
}

pub fn berries() -> ItemDefinition {
    ItemDefinition::new("berries", "野果", ItemCategory::Food)
        .with_base_value(5)
        .perishable()
}

pub fn wood() -> ItemDefinition {
    ItemDefinition::new("wood", "木材", ItemCategory::Material).with_base_value(12)
}

pub fn skin() -> ItemDefinition {
    ItemDefinition::new("skin", "兽皮", ItemCategory::Material).with_base_value(30)
}

pub fn herbs() -> ItemDefinition {
    ItemDefinition::new("herbs", "草药", ItemCategory::Material).with_base_value(35)
}

pub fn shell() -> ItemDefinition {
    ItemDefinition::new("shell", "精美贝壳", ItemCategory::Luxury).with_base_value(40)
}

pub fn axe() -> ItemDefinition {
    ItemDefinition::new("axe", "石斧", ItemCategory::Tool).with_base_value(50)
}

pub fn fisherman() -> NpcTemplate {
    NpcTemplate {
        id: NpcId::from("npc1"),
        name: "老渔夫".into(),
        role: "捕鱼者".into(),
        avatar: "👴".into(),
        inventory: vec![ItemId::from("fish"), ItemId::from("fish")],
        wants: Want::new(
            WantRule::ItemName("木材".into()),
            "我需要一些木材来加固我的渔船。",
        ),
        dialogue: Dialogue {
            greeting: "嘿，年轻人！今天的鱼很肥美，想要换点吗？".into(),
            success: "太好了！这些木材正是我需要的，这些鱼归你了。".into(),
            hint: "听说那个采果子的姑娘最近想吃鱼想得发疯。".into(),
            refusals: RefusalTable::new("这东西对我没用，我只想要一些结实的木材。")
                .with_line("food", "我自己就有吃不完的鱼，不需要更多的食物。")
                .with_line("tool", "这些工具太精细了，我这粗人只会用木头修船。")
                .with_line("grain", "谷物虽然好，但我现在更担心我的船漏水。"),
        },
    }
}

pub fn hunter() -> NpcTemplate {
    NpcTemplate {
        id: NpcId::from("npc3"),
        name: "猎人".into(),
        role: "狩猎者".into(),
        avatar: "🏹".into(),
        inventory: vec![ItemId::from("axe"), ItemId::from("herbs")],
        wants: Want::new(
            WantRule::ItemName("兽皮".into()),
            "冬天快到了，我需要更多的兽皮来做冬衣。",
        ),
        dialogue: Dialogue {
            greeting: "看我这把石斧，磨得非常锋利。".into(),
            success: "好厚实的皮毛！成交。".into(),
            hint: "织女那里有很多兽皮，但她最近好像在愁没有盐。".into(),
            refusals: RefusalTable::new("我不需要这个。给我兽皮，我就把斧头给你。")
                .with_line("tool", "我自己就是做工具的好手，我只想要兽皮。"),
        },
    }
}

/// Owned content behind a [`GameEnv`].
pub struct Market {
    pub items: ItemCatalog,
    pub npcs: NpcRoster,
    pub config: GameConfig,
}

impl Market {
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&self.items, &self.npcs, &self.config)
    }
}

pub fn market() -> Market {
    Market {
        items: ItemCatalog::new(vec![
            fish(),
            grain(),
            berries(),
            wood(),
            skin(),
            herbs(),
            shell(),
            axe(),
        ])
        .expect("fixture catalog has unique ids"),
        npcs: NpcRoster::new(vec![fisherman(), hunter()]).expect("fixture roster has unique ids"),
        config: GameConfig::default(),
    }
}
