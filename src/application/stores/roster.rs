//! Id-keyed record list shared by the device stores

use serde::{Deserialize, Serialize};

use crate::domain::{Olt, Onu, User};

/// Record with a per-store unique id
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Olt {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Onu {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Records in insertion order plus a change counter.
///
/// The counter is bumped on every effective mutation and is never
/// persisted; derived views compare it to decide whether to recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster<T> {
    items: Vec<T>,
    #[serde(skip)]
    revision: u64,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }
}

impl<T: Keyed> Roster<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, revision: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.revision += 1;
    }

    /// Replace the entry with the same id. Returns false, changing nothing,
    /// when no such entry exists.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(slot) => {
                *slot = item;
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Remove every entry with this id. Returns whether anything went away.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != id);
        let removed = self.items.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Mark the roster changed without touching its records.
    pub(crate) fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec(&'static str, u32);

    impl Keyed for Rec {
        fn key(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn replace_of_unknown_id_changes_nothing() {
        let mut roster = Roster::new(vec![Rec("a", 1)]);
        assert!(!roster.replace(Rec("z", 9)));
        assert_eq!(roster.items(), &[Rec("a", 1)]);
        assert_eq!(roster.revision(), 0);
    }

    #[test]
    fn remove_twice_equals_remove_once() {
        let mut roster = Roster::new(vec![Rec("a", 1), Rec("b", 2)]);
        assert!(roster.remove("a"));
        let after_once = roster.items().to_vec();
        assert!(!roster.remove("a"));
        assert_eq!(roster.items(), after_once.as_slice());
        assert_eq!(roster.revision(), 1);
    }

    #[test]
    fn interleaved_operations_leave_untargeted_records_alone() {
        let mut roster = Roster::new(vec![Rec("a", 1), Rec("b", 2), Rec("c", 3)]);
        roster.push(Rec("d", 4));
        roster.replace(Rec("b", 20));
        roster.remove("c");
        roster.replace(Rec("x", 0));
        roster.remove("x");

        assert_eq!(roster.items(), &[Rec("a", 1), Rec("b", 20), Rec("d", 4)]);
        assert_eq!(roster.revision(), 3);
    }

    #[test]
    fn serializes_as_plain_list() {
        let roster = Roster::new(vec![crate::domain::seed::users().remove(0)]);
        let json = serde_json::to_value(&roster).unwrap();
        assert!(json.is_array());
        let back: Roster<User> = serde_json::from_value(json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.revision(), 0);
    }
}
