//! Activity list shared by every view
//!
//! Activities are free-text strings with no identifier; the position in the
//! list is the only handle. Entries are stored exactly as given, surrounding
//! whitespace included, and duplicates are allowed.

use tracing::debug;

/// Ordered, insertion-preserving list of activity names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityList {
    items: Vec<String>,
}

impl ActivityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Append an activity verbatim
    pub fn push(&mut self, activity: impl Into<String>) {
        let activity = activity.into();
        debug!(%activity, len = self.items.len(), "ActivityList::push: called");
        self.replace_with(|current| {
            let mut next = current.to_vec();
            next.push(activity);
            next
        });
    }

    /// Remove the entry at `index`, returning it
    ///
    /// Returns None and leaves the list untouched when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        debug!(index, len = self.items.len(), "ActivityList::remove: called");
        let removed = self.items.get(index)?.clone();
        self.replace_with(|current| {
            current
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, a)| a.clone())
                .collect()
        });
        Some(removed)
    }

    /// Publish a new snapshot built from the current one
    fn replace_with(&mut self, build: impl FnOnce(&[String]) -> Vec<String>) {
        let next = build(&self.items);
        self.items = next;
    }
}

impl<S: Into<String>> FromIterator<S> for ActivityList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
