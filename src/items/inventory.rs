//! Inventory controller
//!
//! Deliberately stateless between interactions: every operation
//! reloads the table from the store, mutates it in memory, and writes
//! the whole thing back. The file on disk is the single source of
//! truth at the start of each cycle.

use chrono::NaiveDateTime;

use crate::store::{Store, StoreError};

use super::item::Item;

/// Add/remove operations over the persisted item table
#[derive(Debug, Clone)]
pub struct Inventory {
    store: Store,
}

impl Inventory {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Items in display order, newest first. Ties keep file order.
    pub fn display_items(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = self.store.load()?;
        items.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(items)
    }

    /// Add an item with `now` as its entry timestamp.
    /// Empty and whitespace-only names are silently ignored.
    pub fn add(&self, name: &str, now: NaiveDateTime) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }

        let mut items = self.store.load()?;
        items.push(Item::new(name, now));
        self.store.save(&items)?;

        log::info!("Added {:?} to the fridge", name);
        Ok(())
    }

    /// Remove the item at `index` in display order.
    /// Out-of-range indices are silently ignored.
    pub fn remove(&self, index: usize) -> Result<(), StoreError> {
        let mut items = self.display_items()?;
        if index >= items.len() {
            return Ok(());
        }

        let removed = items.remove(index);
        self.store.save(&items)?;

        log::info!("Removed {:?} from the fridge", removed.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_micro_opt(hour, 0, 0, 500_000)
            .unwrap()
    }

    fn temp_inventory(dir: &tempfile::TempDir) -> Inventory {
        Inventory::new(Store::new(dir.path().join("fridge_data.csv")))
    }

    #[test]
    fn test_add_persists_with_given_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = temp_inventory(&dir);
        let now = stamp(10, 8);

        inventory.add("Milk", now).unwrap();

        let items = inventory.display_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].added_at, now);
    }

    #[test]
    fn test_add_empty_name_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = temp_inventory(&dir);

        inventory.add("", stamp(10, 8)).unwrap();
        inventory.add("   ", stamp(10, 9)).unwrap();

        assert!(inventory.display_items().unwrap().is_empty());
    }

    #[test]
    fn test_add_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = temp_inventory(&dir);

        inventory.add("  Milk ", stamp(10, 8)).unwrap();

        assert_eq!(inventory.display_items().unwrap()[0].name, "Milk");
    }

    #[test]
    fn test_display_order_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = temp_inventory(&dir);

        inventory.add("Old", stamp(8, 12)).unwrap();
        inventory.add("New", stamp(10, 12)).unwrap();
        inventory.add("Middle", stamp(9, 12)).unwrap();

        let names: Vec<_> = inventory
            .display_items()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["New", "Middle", "Old"]);
    }

    #[test]
    fn test_remove_by_display_position() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = temp_inventory(&dir);
        inventory.add("Old", stamp(8, 12)).unwrap();
        inventory.add("New", stamp(10, 12)).unwrap();

        // Position 0 is the newest item
        inventory.remove(0).unwrap();

        let items = inventory.display_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Old");
    }

    #[test]
    fn test_remove_out_of_range_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = temp_inventory(&dir);
        inventory.add("Milk", stamp(10, 8)).unwrap();

        inventory.remove(5).unwrap();

        assert_eq!(inventory.display_items().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let inventory = temp_inventory(&dir);

        inventory.add("Milk", stamp(9, 8)).unwrap();
        inventory.add("Milk", stamp(10, 8)).unwrap();

        let items = inventory.display_items().unwrap();
        assert_eq!(items.len(), 2);

        // Deleting one leaves the other untouched
        inventory.remove(0).unwrap();
        let items = inventory.display_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].added_at, stamp(9, 8));
    }
}
