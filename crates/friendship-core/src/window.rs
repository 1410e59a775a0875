//! Proximity Windows
//!
//! The set of characters seen near the player during one sampling interval.

use std::collections::BTreeMap;

use crate::world::fold_name;

/// Lowercased character name -> datable flag.
///
/// Ordered so that boundary processing and logs are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProximityWindow {
    nearby: BTreeMap<String, bool>,
}

impl ProximityWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a character as nearby under its folded name.
    pub fn insert(&mut self, name: &str, datable: bool) {
        self.nearby.insert(fold_name(name), datable);
    }

    /// Adds every entry of `other`; entries already present keep one slot.
    pub fn merge(&mut self, other: &ProximityWindow) {
        for (key, datable) in &other.nearby {
            self.nearby.insert(key.clone(), *datable);
        }
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, name: &str) -> bool {
        self.nearby.contains_key(&fold_name(name))
    }

    /// Datable flag recorded for `name`, if present.
    pub fn datable(&self, name: &str) -> Option<bool> {
        self.nearby.get(&fold_name(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.nearby.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nearby.is_empty()
    }

    /// Lowercased keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nearby.keys().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<(S, bool)> for ProximityWindow {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut window = ProximityWindow::new();
        for (name, datable) in iter {
            window.insert(name.as_ref(), datable);
        }
        window
    }
}
