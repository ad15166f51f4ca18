use frontdoor_types::EntryId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Session-local set of starred entry ids.
///
/// Ids are not validated against any collection; starring an unknown id is
/// harmless and simply never renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: HashSet<EntryId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(EntryId::new(id));
            true
        }
    }

    pub fn insert(&mut self, id: &str) {
        self.ids.insert(EntryId::new(id));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in sorted order, for stable output
    pub fn sorted_ids(&self) -> Vec<&EntryId> {
        let mut ids: Vec<_> = self.ids.iter().collect();
        ids.sort();
        ids
    }
}

impl<S: AsRef<str>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|s| EntryId::new(s.as_ref())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        let mut favorites: FavoriteSet = ["2", "4"].into_iter().collect();
        for id in ["2", "7"] {
            let before = favorites.contains(id);
            favorites.toggle(id);
            assert_ne!(favorites.contains(id), before);
            favorites.toggle(id);
            assert_eq!(favorites.contains(id), before);
        }
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn test_toggle_reports_new_membership() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle("10"));
        assert!(!favorites.toggle("10"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let mut favorites = FavoriteSet::new();
        favorites.insert("1");
        favorites.insert("1");
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.sorted_ids(), vec![&EntryId::new("1")]);
    }
}
