//! Insertion-ordered item counts

/// Item counts kept in the order items were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<(String, u32)>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(item, count)` pairs; a repeated item keeps its first
    /// position and takes the later count
    pub fn from_entries<S: Into<String>>(entries: impl IntoIterator<Item = (S, u32)>) -> Self {
        let mut inventory = Self::new();
        for (item, count) in entries {
            inventory.set(item.into(), count);
        }
        inventory
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, item: &str) -> Option<u32> {
        self.position(item).map(|i| self.entries[i].1)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.position(item).is_some()
    }

    /// Set the count of `item`, appending it when new
    pub fn set(&mut self, item: String, count: u32) {
        match self.position(&item) {
            Some(i) => self.entries[i].1 = count,
            None => self.entries.push((item, count)),
        }
    }

    /// Mutable count of `item`, inserted with zero when new
    pub fn count_mut(&mut self, item: &str) -> &mut u32 {
        let index = match self.position(item) {
            Some(i) => i,
            None => {
                self.entries.push((item.to_string(), 0));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn remove(&mut self, item: &str) -> Option<u32> {
        self.position(item).map(|i| self.entries.remove(i).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(item, _)| item.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(item, count)| (item.as_str(), *count))
    }

    /// Sort entries by item name
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
    }

    fn position(&self, item: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == item)
    }
}

/// Count every item in the list
pub fn create_inventory(items: &[&str]) -> Inventory {
    let mut inventory = Inventory::new();
    add_items(&mut inventory, items);
    inventory
}

/// Increment the count of each listed item
pub fn add_items(inventory: &mut Inventory, items: &[&str]) {
    for item in items {
        *inventory.count_mut(item) += 1;
    }
}

/// Decrement each listed item that is present, never below zero
pub fn decrement_items(inventory: &mut Inventory, items: &[&str]) {
    for item in items {
        if let Some(count) = inventory.get(item).filter(|&count| count > 0) {
            inventory.set(item.to_string(), count - 1);
        }
    }
}

/// Drop `item` entirely, returning its count when it was present
pub fn remove_item(inventory: &mut Inventory, item: &str) -> Option<u32> {
    inventory.remove(item)
}

/// `(item, count)` pairs with a positive count, in inventory order
pub fn list_inventory(inventory: &Inventory) -> Vec<(String, u32)> {
    inventory
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(item, count)| (item.to_string(), count))
        .collect()
}
