// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One catalog item. The attribute set is fixed, so it is a plain struct
/// rather than a key-value bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragranceEntry {
    pub name: String,
    /// Scent notes in catalog order.
    pub profile: Vec<String>,
    pub category: String,
    pub occasion: Vec<String>,
    /// Open-ended label such as "Niche", "Designer" or "Clone".
    #[serde(rename = "type")]
    pub kind: String,
}

impl FragranceEntry {
    pub fn new(name: &str, profile: &[&str], category: &str, occasion: &[&str], kind: &str) -> Self {
        Self {
            name: name.to_string(),
            profile: profile.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            occasion: occasion.iter().map(|s| s.to_string()).collect(),
            kind: kind.to_string(),
        }
    }

    /// The entry's notes as a set, for intersection.
    pub fn note_set(&self) -> BTreeSet<&str> {
        self.profile.iter().map(String::as_str).collect()
    }
}

/// A single (note, count) row of a note profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCount {
    pub note: String,
    pub count: u64,
}

/// "Layer `top` over `base`": two owned fragrances that share notes.
/// (A, B) and (B, A) are distinct suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayeringSuggestion {
    pub base: String,
    pub top: String,
    /// Sorted, so rendering is stable.
    pub shared_notes: BTreeSet<String>,
}

impl LayeringSuggestion {
    /// The key under which a saved hybrid is stored: `"{base} + {top}"`.
    pub fn combo_key(&self) -> String {
        combo_key(&self.base, &self.top)
    }
}

pub fn combo_key(base: &str, top: &str) -> String {
    format!("{} + {}", base, top)
}
