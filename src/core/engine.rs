use crate::core::catalog::CatalogStore;
use crate::core::collection::UserCollection;
use crate::core::types::{FragranceEntry, LayeringSuggestion, NoteCount};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Note frequencies across a collection, sorted by count descending.
/// Equal counts keep the order in which each note was first counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteProfile {
    counts: Vec<NoteCount>,
}

impl NoteProfile {
    pub fn as_slice(&self) -> &[NoteCount] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteCount> {
        self.counts.iter()
    }

    pub fn get(&self, note: &str) -> Option<u64> {
        self.counts.iter().find(|c| c.note == note).map(|c| c.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Both engine outputs from one pass over the same inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub profile: NoteProfile,
    pub suggestions: Vec<LayeringSuggestion>,
    /// Entered names the catalog does not know; excluded from the above.
    pub unresolved: Vec<String>,
}

/// Profiles a user's collection against the catalog and proposes layering
/// pairs. Pure: every call recomputes from the borrowed inputs.
pub struct ProfileEngine<'a> {
    collection: &'a UserCollection,
    catalog: &'a CatalogStore,
}

impl<'a> ProfileEngine<'a> {
    pub fn new(collection: &'a UserCollection, catalog: &'a CatalogStore) -> Self {
        Self { collection, catalog }
    }

    /// Resolvable entries in collection order, duplicates included.
    fn entries(&self) -> impl Iterator<Item = &'a FragranceEntry> + 'a {
        let catalog = self.catalog;
        self.collection
            .names()
            .iter()
            .filter_map(move |name| catalog.get(name))
    }

    /// Names that resolve in the catalog, in collection order.
    pub fn resolved(&self) -> Vec<&'a str> {
        self.entries().map(|e| e.name.as_str()).collect()
    }

    /// Names the catalog does not know, in collection order.
    pub fn unresolved(&self) -> Vec<&'a str> {
        self.collection
            .names()
            .iter()
            .filter(|name| !self.catalog.contains(name))
            .map(String::as_str)
            .collect()
    }

    pub fn compute_note_profile(&self) -> NoteProfile {
        // 1. Count in first-seen order; `slot` maps a note to its row.
        let mut counts: Vec<NoteCount> = Vec::new();
        let mut slot: HashMap<&str, usize> = HashMap::new();
        for entry in self.entries() {
            for note in &entry.profile {
                let i = *slot.entry(note.as_str()).or_insert_with(|| {
                    counts.push(NoteCount { note: note.clone(), count: 0 });
                    counts.len() - 1
                });
                counts[i].count += 1;
            }
        }

        // 2. Stable sort keeps first-seen order among equal counts.
        counts.sort_by_key(|c| std::cmp::Reverse(c.count));
        NoteProfile { counts }
    }

    /// Every ordered pair of differently-named owned fragrances whose note
    /// sets intersect. Quadratic in the collection length, which is
    /// hand-entered and small.
    pub fn compute_layering_suggestions(&self) -> Vec<LayeringSuggestion> {
        let names = self.collection.names();
        let mut suggestions = Vec::new();

        for base in names {
            let Some(base_entry) = self.catalog.get(base) else { continue };
            let base_notes = base_entry.note_set();

            for top in names {
                if base == top {
                    continue;
                }
                let Some(top_entry) = self.catalog.get(top) else { continue };

                let shared: BTreeSet<String> = top_entry
                    .note_set()
                    .intersection(&base_notes)
                    .map(|n| n.to_string())
                    .collect();
                if !shared.is_empty() {
                    suggestions.push(LayeringSuggestion {
                        base: base.clone(),
                        top: top.clone(),
                        shared_notes: shared,
                    });
                }
            }
        }
        suggestions
    }

    pub fn analyze(&self) -> Analysis {
        let analysis = Analysis {
            profile: self.compute_note_profile(),
            suggestions: self.compute_layering_suggestions(),
            unresolved: self.unresolved().into_iter().map(str::to_string).collect(),
        };
        debug!(
            owned = self.collection.len(),
            notes = analysis.profile.len(),
            suggestions = analysis.suggestions.len(),
            unresolved = analysis.unresolved.len(),
            "analyzed collection"
        );
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(names: &[&str]) -> Analysis {
        let catalog = CatalogStore::builtin();
        let collection = UserCollection::from_names(names);
        ProfileEngine::new(&collection, &catalog).analyze()
    }

    #[test]
    fn disjoint_profiles_give_no_suggestions() {
        let a = analyze(&["Creed Aventus", "Dior Sauvage EDT"]);
        assert!(a.suggestions.is_empty());
        assert_eq!(a.profile.len(), 7);
        assert!(a.profile.iter().all(|c| c.count == 1));
    }

    #[test]
    fn shared_bergamot_gives_both_directions() {
        let a = analyze(&["Dior Sauvage EDT", "Dior Sauvage EDP"]);
        assert_eq!(a.suggestions.len(), 2);
        assert_eq!(a.suggestions[0].base, "Dior Sauvage EDT");
        assert_eq!(a.suggestions[0].top, "Dior Sauvage EDP");
        assert_eq!(a.suggestions[1].base, "Dior Sauvage EDP");
        assert_eq!(a.suggestions[1].top, "Dior Sauvage EDT");
        for s in &a.suggestions {
            assert_eq!(s.shared_notes.iter().collect::<Vec<_>>(), vec!["bergamot"]);
        }
    }

    #[test]
    fn unknown_name_yields_nothing() {
        let a = analyze(&["Nonexistent Scent"]);
        assert!(a.profile.is_empty());
        assert!(a.suggestions.is_empty());
        assert_eq!(a.unresolved, vec!["Nonexistent Scent"]);
    }

    #[test]
    fn duplicate_name_counts_twice_but_never_pairs_with_itself() {
        let a = analyze(&["Dior Sauvage EDT", "Dior Sauvage EDT"]);
        assert!(a.suggestions.is_empty());
        assert_eq!(a.profile.len(), 3);
        for note in ["bergamot", "pepper", "ambroxan"] {
            assert_eq!(a.profile.get(note), Some(2));
        }
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        // Percival: bergamot, lavender, musk, amber; EDP: bergamot, amber, lavender, spicy
        let a = analyze(&["Parfums de Marly Percival", "Dior Sauvage EDP"]);
        let order: Vec<&str> = a.profile.iter().map(|c| c.note.as_str()).collect();
        assert_eq!(order, vec!["bergamot", "lavender", "amber", "musk", "spicy"]);
        assert_eq!(a.profile.get("bergamot"), Some(2));
        assert_eq!(a.profile.get("musk"), Some(1));
    }

    #[test]
    fn duplicate_note_within_entry_counts_per_listing() {
        let catalog = CatalogStore::from_entries(vec![FragranceEntry::new(
            "Double",
            &["rose", "rose", "oud"],
            "x",
            &[],
            "Indie",
        )])
        .unwrap();
        let collection = UserCollection::from_names(["Double"]);
        let profile = ProfileEngine::new(&collection, &catalog).compute_note_profile();
        assert_eq!(profile.get("rose"), Some(2));
        assert_eq!(profile.total(), 3);
    }

    #[test]
    fn unresolved_names_are_skipped_inside_pairs() {
        let a = analyze(&["Dior Sauvage EDT", "Ghost", "Dior Sauvage EDP"]);
        assert_eq!(a.suggestions.len(), 2);
        assert!(a
            .suggestions
            .iter()
            .all(|s| s.base != "Ghost" && s.top != "Ghost"));
        assert_eq!(a.profile.total(), 7);
    }

    #[test]
    fn resolved_and_unresolved_partition_the_collection() {
        let catalog = CatalogStore::builtin();
        let collection = UserCollection::from_names(["YSL Y", "Ghost", "YSL Y"]);
        let engine = ProfileEngine::new(&collection, &catalog);
        assert_eq!(engine.resolved(), vec!["YSL Y", "YSL Y"]);
        assert_eq!(engine.unresolved(), vec!["Ghost"]);
    }
}
