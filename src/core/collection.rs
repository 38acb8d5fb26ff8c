// src/core/collection.rs
use serde::{Deserialize, Serialize};

/// The fragrance names a user says they own, in the order entered.
///
/// Lines are trimmed and blank lines dropped. Duplicates and names the
/// catalog does not know are kept; the engine decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserCollection {
    names: Vec<String>,
}

impl UserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses free text, one name per line.
    pub fn parse(text: &str) -> Self {
        Self::from_names(text.lines())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { names }
    }

    /// Appends one name; blank input is ignored. Returns whether it was added.
    pub fn push(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let c = UserCollection::parse("  Creed Aventus \n\n\t\nYSL Y\r\n   \nYSL Y\n");
        assert_eq!(c.names(), &["Creed Aventus", "YSL Y", "YSL Y"]);
    }

    #[test]
    fn push_ignores_blank() {
        let mut c = UserCollection::new();
        assert!(!c.push("   "));
        assert!(c.push(" Xerjoff Naxos "));
        assert_eq!(c.names(), &["Xerjoff Naxos"]);
    }
}
