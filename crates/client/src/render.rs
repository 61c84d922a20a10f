//! Plain-text views of session state.

use std::fmt::Write as _;

use barter_core::{GameState, History, Inventory, ItemInstance, NpcState};
use console::style;

pub fn status(state: &GameState, daily_trade_limit: u8) -> String {
    let status = if state.is_won() {
        style("已完成目标").green().bold().to_string()
    } else {
        "进行中".to_owned()
    };
    format!(
        "{} 第 {} 天 · 今日剩余交易 {}/{} · {}",
        style("==").dim(),
        state.day,
        state.trades_remaining(daily_trade_limit),
        daily_trade_limit,
        status
    )
}

pub fn item(item: &ItemInstance) -> String {
    let mut line = format!(
        "{} {} ({})",
        item.definition().icon,
        item.name(),
        item.category()
    );
    if let Some(freshness) = item.freshness() {
        let _ = write!(line, " 新鲜度 {}", freshness.value());
    }
    line
}

pub fn inventory(title: &str, inventory: &Inventory) -> String {
    let mut out = format!("{}\n", style(title).bold().cyan());
    if inventory.is_empty() {
        out.push_str("  (空)\n");
    }
    for (index, entry) in inventory.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, item(entry));
    }
    out
}

pub fn npc(npc: &NpcState) -> String {
    let profile = &npc.profile;
    let mut out = format!(
        "{} {} · {}\n",
        profile.avatar,
        style(&profile.name).bold().yellow(),
        profile.role
    );
    let _ = writeln!(out, "  “{}”", profile.dialogue.greeting);
    let _ = writeln!(out, "  想要：{}", profile.wants.description);
    out.push_str(&inventory("  TA 的物品", &npc.inventory));
    out
}

pub fn roster(state: &GameState) -> String {
    let mut out = String::new();
    for (index, npc) in state.npcs.iter().enumerate() {
        let marker = if state.current_npc.as_ref() == Some(npc.id()) {
            "*"
        } else {
            " "
        };
        let goods: Vec<_> = npc
            .inventory
            .iter()
            .map(|item| item.definition().icon.as_str())
            .collect();
        let _ = writeln!(
            out,
            "{marker}{}. {} {} [{}] {}",
            index + 1,
            npc.profile.avatar,
            npc.name(),
            npc.id(),
            goods.join(" ")
        );
    }
    out
}

pub fn look(state: &GameState, daily_trade_limit: u8) -> String {
    let mut out = status(state, daily_trade_limit);
    out.push('\n');
    let _ = writeln!(out, "{}", state.message);
    out.push_str(&inventory("你的物品", &state.player));
    if let Some(npc) = state.current_npc() {
        out.push_str(&self::npc(npc));
    }
    out
}

pub fn history(history: &History) -> String {
    let mut out = String::new();
    for line in history.iter() {
        let _ = writeln!(out, "- {line}");
    }
    out
}
