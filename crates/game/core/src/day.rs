//! Day transition and perishable decay.

use crate::config::DecayRules;
use crate::state::{Day, Inventory, ItemInstance};

/// Result of [`advance_day`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayTransition {
    pub inventory: Inventory,
    pub day: Day,
    /// Instances whose freshness reached zero, in their former order.
    pub spoiled: Vec<ItemInstance>,
}

/// Advances to the next day and decays a perishable inventory.
///
/// Decay applies when the resulting day is past [`Day::FIRST`]: every
/// perishable loses `decay_per_day` freshness (floored at zero) and anything
/// at zero is dropped. Non-perishables pass through untouched.
pub fn advance_day(inventory: &Inventory, day: Day, rules: &DecayRules) -> DayTransition {
    let next = day.next();
    let decays = next > Day::FIRST;

    let mut kept = Inventory::new();
    let mut spoiled = Vec::new();
    for item in inventory {
        let mut item = item.clone();
        if decays {
            item.decay(rules.decay_per_day);
        }
        if item.is_spoiled() {
            spoiled.push(item);
        } else {
            kept.push(item);
        }
    }

    DayTransition {
        inventory: kept,
        day: next,
        spoiled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Freshness, InstanceId};
    use crate::testing;

    fn pantry() -> Inventory {
        Inventory::from_items(vec![
            testing::fish().instantiate(InstanceId(1)),
            testing::grain().instantiate(InstanceId(2)),
        ])
    }

    fn freshness_of(inventory: &Inventory, instance: u64) -> Option<u8> {
        inventory
            .get(InstanceId(instance))
            .and_then(|item| item.freshness())
            .map(Freshness::value)
    }

    #[test]
    fn decays_perishables_by_fixed_amount() {
        let transition = advance_day(&pantry(), Day::FIRST, &DecayRules::default());

        assert_eq!(transition.day, Day(2));
        assert_eq!(freshness_of(&transition.inventory, 1), Some(75));
        assert!(transition.inventory.contains(InstanceId(2)));
        assert!(transition.spoiled.is_empty());
    }

    #[test]
    fn freshness_after_n_days_is_linear_until_removal() {
        let rules = DecayRules::default();
        let mut inventory = pantry();
        let mut day = Day::FIRST;

        for expected in [75, 50, 25] {
            let transition = advance_day(&inventory, day, &rules);
            inventory = transition.inventory;
            day = transition.day;
            assert_eq!(freshness_of(&inventory, 1), Some(expected));
        }

        let transition = advance_day(&inventory, day, &rules);
        assert_eq!(transition.day, Day(5));
        assert!(!transition.inventory.contains(InstanceId(1)));
        assert_eq!(transition.spoiled.len(), 1);
        assert_eq!(transition.spoiled[0].instance, InstanceId(1));
        assert!(transition.inventory.contains(InstanceId(2)));
    }

    #[test]
    fn decay_floors_at_zero() {
        let rules = DecayRules { decay_per_day: 60 };
        let transition = advance_day(&pantry(), Day::FIRST, &rules);
        assert_eq!(freshness_of(&transition.inventory, 1), Some(40));

        let transition = advance_day(&transition.inventory, transition.day, &rules);
        assert_eq!(transition.spoiled[0].freshness(), Some(Freshness::SPOILED));
    }

    #[test]
    fn input_inventory_is_not_mutated() {
        let inventory = pantry();
        let _ = advance_day(&inventory, Day::FIRST, &DecayRules::default());
        assert_eq!(freshness_of(&inventory, 1), Some(100));
    }
}
