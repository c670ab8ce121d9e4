use std::collections::HashMap;

use crate::{Error, Result};

/// Bijection between external string labels and dense vertex ids.
///
/// Ids are handed out from a counter starting at 0, in order of first
/// sighting. A label is never reassigned or removed once recorded.
#[derive(Debug, Clone, Default)]
pub struct IdentifierSpace {
    ids: HashMap<String, usize>,
    labels: Vec<String>,
}

impl IdentifierSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, assigning the next unused one on first sight.
    pub fn lookup_or_create(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.ids.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    /// Read-only lookup of a label.
    pub fn get_id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// Reverse lookup from an id back to its label.
    pub fn get_mapped(&self, id: usize) -> Result<&str> {
        self.labels
            .get(id)
            .map(String::as_str)
            .ok_or(Error::Mapping(id))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in id order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}
