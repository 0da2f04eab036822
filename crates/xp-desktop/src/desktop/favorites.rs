//! Favorite projects shared between panes

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of project identifiers
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet {
    items: Vec<String>,
}

impl FavoritesSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the project if absent, remove it if present
    ///
    /// Returns whether the project is a favorite afterwards.
    pub fn toggle(&mut self, project_id: &str) -> bool {
        if let Some(index) = self.items.iter().position(|p| p == project_id) {
            self.items.remove(index);
            false
        } else {
            self.items.push(project_id.to_string());
            true
        }
    }

    /// Whether the project is a favorite
    pub fn contains(&self, project_id: &str) -> bool {
        self.items.iter().any(|p| p == project_id)
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no favorites
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Favorites in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}
