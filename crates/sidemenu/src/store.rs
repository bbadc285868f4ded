//! Parent → children bookkeeping for the navigation tree.
//!
//! The store is a plain container: it neither checks sibling uniqueness nor
//! cascades removals. Both are the controller's job.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::entry::{EntryId, MenuEntry};

/// A depth-first flattened row of the tree.
#[derive(Debug, Clone)]
pub struct MenuRow {
    /// Nesting level, `0` for root entries.
    pub depth: usize,
    pub entry: MenuEntry,
}

#[derive(Debug, Default)]
pub(crate) struct EntryStore {
    /// Children per parent; `None` is the root bucket.
    children: IndexMap<Option<EntryId>, Vec<MenuEntry>>,
    /// Parent of every stored entry.
    parents: HashMap<EntryId, Option<EntryId>>,
}

impl EntryStore {
    /// Appends `entry` to the children of `parent`.
    pub(crate) fn add(&mut self, parent: Option<&MenuEntry>, entry: MenuEntry) {
        let parent_id = parent.map(MenuEntry::id);
        self.parents.insert(entry.id(), parent_id);
        self.children.entry(parent_id).or_default().push(entry);
    }

    /// Direct children of `parent` in insertion order.
    pub(crate) fn children_of(&self, parent: Option<&MenuEntry>) -> &[MenuEntry] {
        self.children
            .get(&parent.map(MenuEntry::id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn find_child(&self, parent: Option<&MenuEntry>, text: &str) -> Option<&MenuEntry> {
        self.children_of(parent).iter().find(|child| child.has_text(text))
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, entry: &MenuEntry) -> bool {
        self.parents.contains_key(&entry.id())
    }

    /// Detaches `entry` from its parent. Children of `entry` are left in place.
    pub(crate) fn remove(&mut self, entry: &MenuEntry) -> bool {
        let Some(parent_id) = self.parents.remove(&entry.id()) else {
            return false;
        };
        if let Some(siblings) = self.children.get_mut(&parent_id) {
            siblings.retain(|sibling| sibling != entry);
            if siblings.is_empty() {
                self.children.shift_remove(&parent_id);
            }
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        self.children.clear();
        self.parents.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.parents.len()
    }

    /// Depth-first, pre-order walk of the whole tree.
    pub(crate) fn rows(&self) -> Vec<MenuRow> {
        let mut rows = Vec::with_capacity(self.len());
        let mut pending: Vec<(usize, &MenuEntry)> = self.children_of(None).iter().rev().map(|entry| (0, entry)).collect();
        while let Some((depth, entry)) = pending.pop() {
            rows.push(MenuRow {
                depth,
                entry: entry.clone(),
            });
            pending.extend(self.children_of(Some(entry)).iter().rev().map(|child| (depth + 1, child)));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> MenuEntry {
        MenuEntry::new(text, None, None)
    }

    fn texts(rows: &[MenuRow]) -> Vec<(usize, String)> {
        rows.iter().map(|row| (row.depth, row.entry.text())).collect()
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut store = EntryStore::default();
        let parent = entry("parent");
        store.add(None, parent.clone());
        store.add(Some(&parent), entry("b"));
        store.add(Some(&parent), entry("a"));

        let names: Vec<String> = store.children_of(Some(&parent)).iter().map(MenuEntry::text).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(store.children_of(Some(&entry("unknown"))).is_empty());
    }

    #[test]
    fn remove_detaches_without_recursing() {
        let mut store = EntryStore::default();
        let parent = entry("parent");
        let child = entry("child");
        store.add(None, parent.clone());
        store.add(Some(&parent), child.clone());

        assert!(store.remove(&parent));
        assert!(!store.contains(&parent));
        assert!(store.contains(&child));
        assert!(store.children_of(None).is_empty());
        assert!(!store.remove(&parent));
    }

    #[test]
    fn rows_walk_depth_first() {
        let mut store = EntryStore::default();
        let first = entry("first");
        let nested = entry("nested");
        store.add(None, first.clone());
        store.add(Some(&first), nested.clone());
        store.add(Some(&nested), entry("deep"));
        store.add(None, entry("second"));

        assert_eq!(
            texts(&store.rows()),
            vec![
                (0, "first".to_string()),
                (1, "nested".to_string()),
                (2, "deep".to_string()),
                (0, "second".to_string()),
            ]
        );
    }

    #[test]
    fn find_child_matches_exact_text_within_parent_only() {
        let mut store = EntryStore::default();
        let parent = entry("parent");
        store.add(None, parent.clone());
        store.add(Some(&parent), entry("Item"));

        assert!(store.find_child(Some(&parent), "Item").is_some());
        assert!(store.find_child(Some(&parent), "item").is_none());
        assert!(store.find_child(None, "Item").is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = EntryStore::default();
        store.add(None, entry("a"));
        store.add(None, entry("b"));
        store.clear();
        assert_eq!(store.len(), 0);
        assert!(store.rows().is_empty());
    }
}
