// File: src/core/browser.rs
use crate::core::catalog::CatalogStore;
use crate::core::types::FragranceEntry;

/// Front ends offer this label to mean "no type filter".
pub const ALL_TYPES: &str = "All";

/// Type and name filters over the catalog. Both are optional; when both are
/// set an entry must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    kind: Option<String>,
    /// Stored lowercased.
    query: Option<String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact type match. `None`, an empty label or "All" clears the filter.
    pub fn with_type(mut self, kind: Option<&str>) -> Self {
        self.set_type(kind);
        self
    }

    /// Case-insensitive substring over the name. Empty clears the filter.
    pub fn with_query(mut self, query: Option<&str>) -> Self {
        self.set_query(query);
        self
    }

    pub fn set_type(&mut self, kind: Option<&str>) {
        self.kind = kind
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != ALL_TYPES)
            .map(str::to_string);
    }

    pub fn set_query(&mut self, query: Option<&str>) {
        self.query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Whether any filter is set.
    pub fn is_active(&self) -> bool {
        self.kind.is_some() || self.query.is_some()
    }

    pub fn matches(&self, entry: &FragranceEntry) -> bool {
        let kind_ok = self.kind.as_deref().map_or(true, |k| entry.kind == k);
        let query_ok = self
            .query
            .as_deref()
            .map_or(true, |q| entry.name.to_lowercase().contains(q));
        kind_ok && query_ok
    }

    /// Matching entries in catalog order.
    pub fn apply<'c>(&self, catalog: &'c CatalogStore) -> Vec<&'c FragranceEntry> {
        catalog
            .all()
            .map(|(_, entry)| entry)
            .filter(|entry| self.matches(entry))
            .collect()
    }
}
