//! Item instances and freshness.

use crate::env::{ItemCategory, ItemDefinition, ItemId};

use super::InstanceId;

/// Freshness of a perishable item, bounded to `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Freshness(u8);

impl Freshness {
    pub const FULL: Self = Self(100);
    pub const SPOILED: Self = Self(0);

    pub fn new(value: u8) -> Result<Self, ItemError> {
        if value > Self::FULL.0 {
            return Err(ItemError::FreshnessOutOfRange { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Loses `amount` points, stopping at zero.
    pub fn decay(self, amount: u8) -> Self {
        Self(self.0.saturating_sub(amount))
    }

    pub fn is_spoiled(self) -> bool {
        self == Self::SPOILED
    }
}

/// Errors raised when constructing an item instance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("perishable item '{item}' has no freshness")]
    MissingFreshness { item: ItemId },

    #[error("non-perishable item '{item}' carries a freshness value")]
    UnexpectedFreshness { item: ItemId },

    #[error("freshness {value} is above 100")]
    FreshnessOutOfRange { value: u8 },
}

impl crate::error::GameError for ItemError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ItemError::MissingFreshness { .. } => "ITEM_MISSING_FRESHNESS",
            ItemError::UnexpectedFreshness { .. } => "ITEM_UNEXPECTED_FRESHNESS",
            ItemError::FreshnessOutOfRange { .. } => "ITEM_FRESHNESS_OUT_OF_RANGE",
        }
    }
}

/// One concrete copy of a catalog item.
///
/// Perishable instances always carry a freshness and non-perishable ones
/// never do; [`ItemInstance::new`] rejects anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemInstance {
    pub instance: InstanceId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    definition: ItemDefinition,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    freshness: Option<Freshness>,
}

impl ItemInstance {
    pub fn new(
        instance: InstanceId,
        definition: ItemDefinition,
        freshness: Option<Freshness>,
    ) -> Result<Self, ItemError> {
        match (definition.perishable, freshness) {
            (true, None) => Err(ItemError::MissingFreshness {
                item: definition.id,
            }),
            (false, Some(_)) => Err(ItemError::UnexpectedFreshness {
                item: definition.id,
            }),
            _ => Ok(Self {
                instance,
                definition,
                freshness,
            }),
        }
    }

    pub fn definition(&self) -> &ItemDefinition {
        &self.definition
    }

    pub fn id(&self) -> &ItemId {
        &self.definition.id
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn category(&self) -> ItemCategory {
        self.definition.category
    }

    pub fn is_perishable(&self) -> bool {
        self.definition.perishable
    }

    pub fn freshness(&self) -> Option<Freshness> {
        self.freshness
    }

    /// Applies one day of decay. No-op for non-perishables.
    pub fn decay(&mut self, amount: u8) {
        if let Some(freshness) = self.freshness.as_mut() {
            *freshness = freshness.decay(amount);
        }
    }

    pub fn is_spoiled(&self) -> bool {
        self.freshness.is_some_and(Freshness::is_spoiled)
    }
}

impl ItemDefinition {
    /// Creates a fresh copy of this template. Perishables start at full freshness.
    pub fn instantiate(&self, instance: InstanceId) -> ItemInstance {
        ItemInstance {
            instance,
            definition: self.clone(),
            freshness: self.perishable.then_some(Freshness::FULL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fish() -> ItemDefinition {
        ItemDefinition::new("fish", "鲜鱼", ItemCategory::Food).perishable()
    }

    fn grain() -> ItemDefinition {
        ItemDefinition::new("grain", "谷物", ItemCategory::Food)
    }

    #[test]
    fn perishables_start_full() {
        let item = fish().instantiate(InstanceId(1));
        assert_eq!(item.freshness(), Some(Freshness::FULL));

        let item = grain().instantiate(InstanceId(2));
        assert_eq!(item.freshness(), None);
    }

    #[test]
    fn perishable_without_freshness_is_rejected() {
        let result = ItemInstance::new(InstanceId(1), fish(), None);
        assert!(matches!(result, Err(ItemError::MissingFreshness { .. })));
    }

    #[test]
    fn non_perishable_with_freshness_is_rejected() {
        let result = ItemInstance::new(InstanceId(1), grain(), Some(Freshness::FULL));
        assert!(matches!(result, Err(ItemError::UnexpectedFreshness { .. })));
    }

    #[test]
    fn freshness_is_bounded() {
        assert!(Freshness::new(101).is_err());
        assert_eq!(Freshness::new(10).unwrap().decay(25), Freshness::SPOILED);
    }

    #[test]
    fn decay_spoils_at_zero() {
        let mut item =
            ItemInstance::new(InstanceId(1), fish(), Some(Freshness::new(25).unwrap())).unwrap();
        assert!(!item.is_spoiled());

        item.decay(25);
        assert!(item.is_spoiled());

        let mut grain = grain().instantiate(InstanceId(2));
        grain.decay(25);
        assert!(!grain.is_spoiled());
    }
}
