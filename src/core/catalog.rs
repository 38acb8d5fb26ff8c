// File: src/core/catalog.rs
use crate::core::types::FragranceEntry;
use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::info;

type Row = (&'static str, &'static [&'static str], &'static str, &'static [&'static str], &'static str);

// name, profile, category, occasion, type
const BUILTIN: &[Row] = &[
    ("Creed Aventus", &["fruity", "smoky", "pineapple", "musk"], "Bold", &["events", "weekends"], "Niche"),
    ("Jean Lowe Immortel", &["fresh", "spicy", "woody"], "Versatile", &["daily", "office"], "Clone"),
    ("Versace Eros Flame", &["sweet", "spicy", "citrus"], "Sensual", &["dates", "night"], "Designer"),
    ("Dolce & Gabbana Light Blue", &["citrus", "aquatic", "woody"], "Fresh", &["daytime", "summer"], "Designer"),
    ("Acqua di Gio Pour Homme", &["marine", "citrus", "aromatic", "woody"], "Aquatic", &["daytime", "office"], "Designer"),
    ("Louis Vuitton Imagination", &["citrus", "ginger", "tea", "amber"], "Elegant", &["night", "formal"], "Designer"),
    ("Amber Oud Aqua Dubai", &["aquatic", "amber", "oud"], "Signature", &["daily", "hot weather"], "Clone"),
    ("YSL Tuxedo", &["patchouli", "ambergris", "vanilla"], "Luxury", &["events", "evening"], "Designer"),
    ("YSL Y", &["apple", "sage", "ambergris", "woody"], "Youthful", &["daily", "night out"], "Designer"),
    ("YSL Myslf", &["bergamot", "orange blossom", "ambrette"], "Modern Fresh", &["daytime", "spring"], "Designer"),
    ("Dior Sauvage EDT", &["bergamot", "pepper", "ambroxan"], "Fresh Spicy", &["versatile", "day and night"], "Designer"),
    ("Dior Sauvage EDP", &["bergamot", "amber", "lavender", "spicy"], "Modern", &["daytime", "night out"], "Designer"),
    ("Clive Christian Blonde Amber", &["amber", "musk", "woods"], "Rich", &["evening", "formal"], "Niche"),
    ("Xerjoff Naxos", &["honey", "tobacco", "citrus", "spicy"], "Opulent", &["evening", "cool weather"], "Niche"),
    ("Maison Patek Rouge", &["saffron", "amber", "airy"], "Sweet", &["year-round", "special"], "Clone"),
    ("Parfums de Marly Layton", &["apple", "vanilla", "lavender", "cardamom", "sandalwood"], "Warm & Spicy", &["day", "night"], "Niche"),
    ("Parfums de Marly Herod", &["tobacco", "vanilla", "cinnamon", "incense"], "Warm & Spicy", &["evening", "fall", "winter"], "Niche"),
    ("Parfums de Marly Percival", &["bergamot", "lavender", "musk", "amber"], "Fresh & Aromatic", &["daytime", "office"], "Niche"),
    ("Parfums de Marly Sedley", &["mint", "lemon", "lavender", "sandalwood"], "Fresh & Citrus", &["spring", "summer", "daytime"], "Niche"),
    ("Parfums de Marly Althaïr", &["vanilla", "cinnamon", "cardamom", "amber"], "Warm & Sweet", &["evening", "special occasions"], "Niche"),
];

/// The fixed fragrance catalog.
///
/// Entries keep their insertion order for browsing; `index` gives O(1)
/// exact-name lookup. Nothing mutates a store once it is built.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<FragranceEntry>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// The catalog embedded in the binary.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(name, profile, category, occasion, kind)| {
                FragranceEntry::new(name, profile, category, occasion, kind)
            })
            .collect();
        // The embedded table has unique names; the unit tests guard that.
        Self::index_unchecked(entries)
    }

    /// Builds a store, rejecting duplicate names.
    pub fn from_entries(entries: Vec<FragranceEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(Error::DuplicateEntry(entry.name.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Loads a catalog from a JSON array of entries.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let entries: Vec<FragranceEntry> =
            serde_json::from_str(&raw).map_err(|e| Error::json(path, e))?;
        let store = Self::from_entries(entries)?;
        info!(path = %path.display(), entries = store.len(), "loaded catalog");
        Ok(store)
    }

    fn index_unchecked(entries: Vec<FragranceEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Exact-match lookup. `None` is a normal outcome.
    pub fn get(&self, name: &str) -> Option<&FragranceEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in catalog order.
    pub fn all(&self) -> impl Iterator<Item = (&str, &FragranceEntry)> {
        self.entries.iter().map(|e| (e.name.as_str(), e))
    }

    /// Distinct type labels, sorted.
    pub fn types(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.kind.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::builtin()
    }
}
