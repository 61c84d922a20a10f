//! Trade resolution.
//!
//! [`resolve_trade`] is a pure decision function: it inspects an NPC's want
//! rule and the two offered instances and reports what should happen. The
//! engine's `ProposeTradeAction` applies an accepted [`TradeReceipt`] to the
//! inventories.

use crate::config::TradeRules;
use crate::env::NpcTemplate;
use crate::narrative;
use crate::state::{InstanceId, ItemInstance};

/// Result of evaluating a proposed swap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum TradeOutcome {
    /// Daily quota already used up. Nothing changes.
    Exhausted { message: String },
    /// The NPC wants the offered item; the two instances swap owners.
    Accepted(TradeReceipt),
    /// The NPC does not want the offered item. Nothing changes.
    Refused(TradeRefusal),
}

impl TradeOutcome {
    /// Narrative line for the message box.
    pub fn message(&self) -> &str {
        match self {
            TradeOutcome::Exhausted { message } => message,
            TradeOutcome::Accepted(receipt) => &receipt.message,
            TradeOutcome::Refused(refusal) => &refusal.message,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, TradeOutcome::Accepted(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TradeReceipt {
    /// Instance leaving the player's inventory.
    pub player_gives: InstanceId,
    /// Instance leaving the NPC's inventory.
    pub npc_gives: InstanceId,
    pub message: String,
    pub history: String,
    /// The NPC-side item is the goal item.
    pub won: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TradeRefusal {
    /// The NPC's own refusal line.
    pub line: String,
    pub message: String,
    pub history: String,
}

/// Decides whether `npc` accepts `player_item` in exchange for `npc_item`.
///
/// The quota check runs first. A match is either the want rule's item name
/// equal to the offered item's name, or its category equal to the offered
/// item's category. Refusal lines are looked up by the player item's id, then
/// its category, then the default line.
///
/// Ownership of the two instances is the caller's concern.
pub fn resolve_trade(
    npc: &NpcTemplate,
    npc_item: &ItemInstance,
    player_item: &ItemInstance,
    trades_today: u8,
    rules: &TradeRules<'_>,
) -> TradeOutcome {
    if trades_today >= rules.daily_trade_limit {
        return TradeOutcome::Exhausted {
            message: narrative::quota_exhausted(rules.daily_trade_limit),
        };
    }

    if npc.wants.rule.accepts(player_item.definition()) {
        let won = npc_item.id() == rules.goal_item;
        let message = if won {
            narrative::goal_reached(npc_item)
        } else {
            narrative::trade_accepted(&npc.name, &npc.dialogue.success)
        };

        return TradeOutcome::Accepted(TradeReceipt {
            player_gives: player_item.instance,
            npc_gives: npc_item.instance,
            message,
            history: narrative::trade_accepted_history(player_item, npc_item),
            won,
        });
    }

    let line = npc
        .dialogue
        .refusals
        .line_for(player_item.definition())
        .to_owned();
    TradeOutcome::Refused(TradeRefusal {
        message: narrative::trade_refused(&npc.name, &line),
        history: narrative::trade_refused_history(&npc.name, player_item),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{ItemCategory, ItemDefinition, WantRule};
    use crate::testing;

    fn instance(definition: ItemDefinition, id: u64) -> ItemInstance {
        definition.instantiate(InstanceId(id))
    }

    #[test]
    fn fisherman_accepts_wood() {
        let config = GameConfig::default();
        let npc = testing::fisherman();
        let fish = instance(testing::fish(), 1);
        let wood = instance(testing::wood(), 2);

        let outcome = resolve_trade(&npc, &fish, &wood, 0, &config.trade_rules());

        let TradeOutcome::Accepted(receipt) = outcome else {
            panic!("expected an accepted trade, got {outcome:?}");
        };
        assert_eq!(receipt.player_gives, InstanceId(2));
        assert_eq!(receipt.npc_gives, InstanceId(1));
        assert!(!receipt.won);
        assert_eq!(receipt.message, "老渔夫：『太好了！这些木材正是我需要的，这些鱼归你了。』");
        assert_eq!(receipt.history, "交易成功！你用『木材』换到了『鲜鱼』。");
    }

    #[test]
    fn quota_check_runs_before_matching() {
        let config = GameConfig::default();
        let npc = testing::fisherman();
        let fish = instance(testing::fish(), 1);
        let wood = instance(testing::wood(), 2);

        let outcome = resolve_trade(&npc, &fish, &wood, 2, &config.trade_rules());

        assert!(matches!(outcome, TradeOutcome::Exhausted { .. }));
    }

    #[test]
    fn name_rule_matches_regardless_of_category() {
        let config = GameConfig::default();
        let npc = testing::fisherman();
        let fish = instance(testing::fish(), 1);
        let odd_wood = instance(
            ItemDefinition::new("driftwood", "木材", ItemCategory::Luxury),
            2,
        );

        let outcome = resolve_trade(&npc, &fish, &odd_wood, 0, &config.trade_rules());

        assert!(outcome.is_accepted());
    }

    #[test]
    fn category_rule_matches_any_item_of_that_category() {
        let config = GameConfig::default();
        let mut npc = testing::fisherman();
        npc.wants.rule = WantRule::Category(ItemCategory::Food);
        let fish = instance(testing::fish(), 1);
        let grain = instance(testing::grain(), 2);
        let wood = instance(testing::wood(), 3);

        assert!(resolve_trade(&npc, &fish, &grain, 0, &config.trade_rules()).is_accepted());
        assert!(!resolve_trade(&npc, &fish, &wood, 0, &config.trade_rules()).is_accepted());
    }

    #[test]
    fn refusal_uses_item_line_before_category_line() {
        let config = GameConfig::default();
        let npc = testing::fisherman();
        let fish = instance(testing::fish(), 1);
        let grain = instance(testing::grain(), 2);
        let berries = instance(testing::berries(), 3);
        let shell = instance(testing::shell(), 4);

        let TradeOutcome::Refused(refusal) =
            resolve_trade(&npc, &fish, &grain, 0, &config.trade_rules())
        else {
            panic!("grain should be refused");
        };
        assert_eq!(refusal.line, "谷物虽然好，但我现在更担心我的船漏水。");
        assert_eq!(refusal.history, "尝试交易失败：老渔夫不需要你的谷物。");

        let TradeOutcome::Refused(refusal) =
            resolve_trade(&npc, &fish, &berries, 0, &config.trade_rules())
        else {
            panic!("berries should be refused");
        };
        assert_eq!(refusal.line, "我自己就有吃不完的鱼，不需要更多的食物。");

        let TradeOutcome::Refused(refusal) =
            resolve_trade(&npc, &fish, &shell, 0, &config.trade_rules())
        else {
            panic!("shell should be refused");
        };
        assert_eq!(refusal.line, "这东西对我没用，我只想要一些结实的木材。");
        assert_eq!(
            refusal.message,
            "老渔夫摇头道：『这东西对我没用，我只想要一些结实的木材。』"
        );
    }

    #[test]
    fn receiving_the_goal_item_wins() {
        let config = GameConfig::default();
        let hunter = testing::hunter();
        let axe = instance(testing::axe(), 1);
        let skin = instance(testing::skin(), 2);

        let TradeOutcome::Accepted(receipt) =
            resolve_trade(&hunter, &axe, &skin, 1, &config.trade_rules())
        else {
            panic!("hunter should accept the skin");
        };
        assert!(receipt.won);
        assert_eq!(receipt.message, "恭喜！你换到了石斧，完成了目标！");
    }

    #[test]
    fn giving_away_the_goal_item_does_not_win() {
        let config = GameConfig::default();
        let mut npc = testing::fisherman();
        npc.wants.rule = WantRule::Category(ItemCategory::Tool);
        let fish = instance(testing::fish(), 1);
        let axe = instance(testing::axe(), 2);

        let TradeOutcome::Accepted(receipt) =
            resolve_trade(&npc, &fish, &axe, 0, &config.trade_rules())
        else {
            panic!("tool rule should accept the axe");
        };
        assert!(!receipt.won);
    }
}
