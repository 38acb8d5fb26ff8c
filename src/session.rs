// File: src/session.rs
use crate::core::catalog::CatalogStore;
use crate::core::collection::UserCollection;
use crate::core::engine::{Analysis, ProfileEngine};
use crate::core::types::LayeringSuggestion;
use crate::error::{Error, Result};
use crate::persistence::{CustomRequest, RequestLogger};
use std::collections::HashSet;
use tracing::debug;

/// Layering pairs the user chose to keep, by combo key.
/// Insertion ordered, deduplicated, no removal.
#[derive(Debug, Clone, Default)]
pub struct HybridStore {
    keys: Vec<String>,
    seen: HashSet<String>,
}

impl HybridStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key. Returns `false` if it was already saved.
    pub fn add(&mut self, key: &str) -> bool {
        if !self.seen.insert(key.to_string()) {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    pub fn save(&mut self, suggestion: &LayeringSuggestion) -> bool {
        self.add(&suggestion.combo_key())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn list_all(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Everything one user accumulates between start and exit. Each front-end
/// session owns its own value; nothing here is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    collection: UserCollection,
    hybrids: HybridStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the owned list with free text, one name per line.
    pub fn set_collection(&mut self, text: &str) {
        self.collection = UserCollection::parse(text);
    }

    pub fn add_owned(&mut self, name: &str) -> bool {
        self.collection.push(name)
    }

    pub fn clear_collection(&mut self) {
        self.collection.clear();
    }

    pub fn collection(&self) -> &UserCollection {
        &self.collection
    }

    /// Recomputes profile and suggestions from the current collection.
    pub fn analyze(&self, catalog: &CatalogStore) -> Analysis {
        ProfileEngine::new(&self.collection, catalog).analyze()
    }

    pub fn save_suggestion(&mut self, suggestion: &LayeringSuggestion) -> bool {
        let added = self.hybrids.save(suggestion);
        debug!(key = %suggestion.combo_key(), added, "save hybrid");
        added
    }

    pub fn saved(&self) -> &HybridStore {
        &self.hybrids
    }

    /// Logs a custom request for the saved hybrids. Saved hybrids stay in
    /// the session afterwards.
    pub fn submit(
        &self,
        logger: &RequestLogger,
        name: &str,
        email: &str,
        notes: &str,
    ) -> Result<CustomRequest> {
        if self.hybrids.is_empty() {
            return Err(Error::NothingSaved);
        }
        let request = CustomRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            hybrids: self.hybrids.list_all().to_vec(),
            notes: notes.to_string(),
        };
        logger.append(&request)?;
        Ok(request)
    }
}
