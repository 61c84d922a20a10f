//! Narrative lines written to the message box and the history log.

use crate::state::{Day, ItemInstance};

pub fn quota_exhausted(daily_trade_limit: u8) -> String {
    format!(
        "你今天已经进行了{}次交易，太累了，先休息吧（结束今日）。",
        count_word(daily_trade_limit)
    )
}

/// Spells small counts the way they are read before a measure word.
fn count_word(n: u8) -> String {
    const WORDS: [&str; 11] = [
        "零", "一", "两", "三", "四", "五", "六", "七", "八", "九", "十",
    ];
    WORDS
        .get(usize::from(n))
        .map_or_else(|| n.to_string(), |word| (*word).to_owned())
}

pub fn trade_accepted(npc_name: &str, success_line: &str) -> String {
    format!("{npc_name}：『{success_line}』")
}

pub fn trade_accepted_history(player_item: &ItemInstance, npc_item: &ItemInstance) -> String {
    format!(
        "交易成功！你用『{}』换到了『{}』。",
        player_item.name(),
        npc_item.name()
    )
}

pub fn goal_reached(goal_item: &ItemInstance) -> String {
    format!("恭喜！你换到了{}，完成了目标！", goal_item.name())
}

pub fn trade_refused(npc_name: &str, refusal_line: &str) -> String {
    format!("{npc_name}摇头道：『{refusal_line}』")
}

pub fn trade_refused_history(npc_name: &str, player_item: &ItemInstance) -> String {
    format!("尝试交易失败：{npc_name}不需要你的{}。", player_item.name())
}

pub const DAY_STARTED: &str = "新的一天开始了。注意：某些食物可能会变质。";

pub fn day_started_history(day: Day) -> String {
    format!("第 {day} 天开始了。")
}
