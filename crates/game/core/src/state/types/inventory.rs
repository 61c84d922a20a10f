//! Ordered item collections held by the player and by NPCs.

use crate::env::ItemId;

use super::{InstanceId, ItemInstance};

/// Ordered collection of item instances.
///
/// Lookup and removal go through [`InstanceId`], never through the catalog
/// id, so holding several copies of the same item is unambiguous.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    items: Vec<ItemInstance>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ItemInstance>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemInstance> {
        self.items.iter()
    }

    pub fn items(&self) -> &[ItemInstance] {
        &self.items
    }

    pub fn get(&self, instance: InstanceId) -> Option<&ItemInstance> {
        self.items.iter().find(|item| item.instance == instance)
    }

    pub fn contains(&self, instance: InstanceId) -> bool {
        self.get(instance).is_some()
    }

    /// Item at a display position (0-based).
    pub fn slot(&self, index: usize) -> Option<&ItemInstance> {
        self.items.get(index)
    }

    /// First held copy of a catalog item.
    pub fn first_of(&self, id: &ItemId) -> Option<&ItemInstance> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn count_of(&self, id: &ItemId) -> usize {
        self.items.iter().filter(|item| item.id() == id).count()
    }

    /// Appends at the end, as received goods are shown last.
    pub fn push(&mut self, item: ItemInstance) {
        self.items.push(item);
    }

    /// Removes and returns the instance, preserving the order of the rest.
    pub fn take(&mut self, instance: InstanceId) -> Option<ItemInstance> {
        let index = self
            .items
            .iter()
            .position(|item| item.instance == instance)?;
        Some(self.items.remove(index))
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a ItemInstance;
    type IntoIter = std::slice::Iter<'a, ItemInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<ItemInstance> for Inventory {
    fn from_iter<T: IntoIterator<Item = ItemInstance>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemCategory, ItemDefinition};

    fn fish(id: u64) -> ItemInstance {
        ItemDefinition::new("fish", "鲜鱼", ItemCategory::Food)
            .perishable()
            .instantiate(InstanceId(id))
    }

    #[test]
    fn take_removes_only_the_named_copy() {
        let mut inventory = Inventory::from_items(vec![fish(1), fish(2), fish(3)]);

        let taken = inventory.take(InstanceId(2)).unwrap();

        assert_eq!(taken.instance, InstanceId(2));
        assert_eq!(
            inventory.iter().map(|item| item.instance).collect::<Vec<_>>(),
            vec![InstanceId(1), InstanceId(3)]
        );
        assert_eq!(inventory.count_of(&ItemId::from("fish")), 2);
    }

    #[test]
    fn take_missing_instance_leaves_inventory_untouched() {
        let mut inventory = Inventory::from_items(vec![fish(1)]);

        assert!(inventory.take(InstanceId(9)).is_none());
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn push_appends_at_end() {
        let mut inventory = Inventory::from_items(vec![fish(1)]);
        inventory.push(fish(7));

        assert_eq!(inventory.slot(1).map(|item| item.instance), Some(InstanceId(7)));
        assert_eq!(
            inventory.first_of(&ItemId::from("fish")).map(|item| item.instance),
            Some(InstanceId(1))
        );
    }
}
