//! Order Items

use std::collections::{BTreeMap, btree_map};

use crate::domain::coffees::models::{Coffee, CoffeeUuid};

/// The coffees referenced by an order.
///
/// Items are unique by identity and always read back in ascending uuid
/// order, whatever order they were inserted or stored in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItems(BTreeMap<CoffeeUuid, Coffee>);

impl OrderItems {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coffee. Returns `false`, leaving the collection unchanged, when
    /// a coffee with the same uuid is already present.
    pub fn insert(&mut self, coffee: Coffee) -> bool {
        match self.0.entry(coffee.uuid()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(coffee);

                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    #[must_use]
    pub fn contains(&self, coffee: CoffeeUuid) -> bool {
        self.0.contains_key(&coffee)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coffees in ascending uuid order.
    pub fn iter(&self) -> impl Iterator<Item = &Coffee> {
        self.0.values()
    }

    /// Coffee uuids in ascending order.
    pub fn uuids(&self) -> impl Iterator<Item = CoffeeUuid> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<Coffee> for OrderItems {
    fn from_iter<I: IntoIterator<Item = Coffee>>(iter: I) -> Self {
        let mut items = Self::new();

        for coffee in iter {
            items.insert(coffee);
        }

        items
    }
}

impl Extend<Coffee> for OrderItems {
    fn extend<I: IntoIterator<Item = Coffee>>(&mut self, iter: I) {
        for coffee in iter {
            self.insert(coffee);
        }
    }
}

impl IntoIterator for OrderItems {
    type Item = Coffee;
    type IntoIter = btree_map::IntoValues<CoffeeUuid, Coffee>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

impl<'a> IntoIterator for &'a OrderItems {
    type Item = &'a Coffee;
    type IntoIter = btree_map::Values<'a, CoffeeUuid, Coffee>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::{Money, iso::GBP};
    use uuid::Uuid;

    use crate::domain::audit::AuditFields;

    use super::*;

    fn coffee(id: u128, name: &str) -> Coffee {
        Coffee {
            audit: AuditFields {
                uuid: CoffeeUuid::from_uuid(Uuid::from_u128(id)),
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
            },
            name: name.to_string(),
            price: Money::from_minor(250, GBP),
        }
    }

    fn ids(items: &OrderItems) -> Vec<u128> {
        items.uuids().map(|uuid| uuid.into_uuid().as_u128()).collect()
    }

    #[test]
    fn reads_back_in_ascending_id_order() {
        let items: OrderItems = [coffee(7, "latte"), coffee(3, "mocha"), coffee(9, "flat white")]
            .into_iter()
            .collect();

        assert_eq!(ids(&items), vec![3, 7, 9]);

        let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["mocha", "latte", "flat white"]);
    }

    #[test]
    fn duplicate_identity_is_not_inserted_twice() {
        let mut items = OrderItems::new();

        assert!(items.insert(coffee(3, "mocha")), "first insert should succeed");
        assert!(
            !items.insert(coffee(3, "renamed mocha")),
            "second insert with the same uuid should be rejected"
        );

        assert_eq!(items.len(), 1);
        assert_eq!(items.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["mocha"]);
    }

    #[test]
    fn owned_iteration_is_ordered_too() {
        let mut items = OrderItems::new();

        items.extend([coffee(9, "a"), coffee(1, "b"), coffee(5, "c")]);

        let ordered: Vec<u128> = items
            .into_iter()
            .map(|c| c.uuid().into_uuid().as_u128())
            .collect();

        assert_eq!(ordered, vec![1, 5, 9]);
    }

    #[test]
    fn empty_collection() {
        let items = OrderItems::new();

        assert!(items.is_empty(), "new collection should be empty");
        assert!(!items.contains(CoffeeUuid::from_uuid(Uuid::from_u128(1))));
    }
}
