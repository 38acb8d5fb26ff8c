use cologne_core::{CatalogStore, ProfileEngine, UserCollection};
use std::collections::BTreeSet;

fn collection(names: &[&str]) -> UserCollection {
    UserCollection::from_names(names)
}

/// A mixed collection: overlaps, a duplicate, unknown names.
const MIXED: &[&str] = &[
    "Parfums de Marly Layton",
    "Unknown Attar",
    "Parfums de Marly Herod",
    "Parfums de Marly Althaïr",
    "YSL Y",
    "Parfums de Marly Layton",
    "Dior Sauvage EDP",
    "unknown attar",
];

#[test]
fn test_counts_sum_to_contributed_notes() {
    let catalog = CatalogStore::builtin();
    let c = collection(MIXED);
    let profile = ProfileEngine::new(&c, &catalog).compute_note_profile();

    let expected: u64 = c
        .names()
        .iter()
        .filter_map(|n| catalog.get(n))
        .map(|e| e.profile.len() as u64)
        .sum();
    assert_eq!(profile.total(), expected);
}

#[test]
fn test_profile_is_sorted_descending() {
    let catalog = CatalogStore::builtin();
    let c = collection(MIXED);
    let profile = ProfileEngine::new(&c, &catalog).compute_note_profile();
    let counts: Vec<u64> = profile.iter().map(|r| r.count).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{:?}", counts);
    // Layton twice plus Herod and Althaïr.
    assert_eq!(profile.as_slice()[0].note, "vanilla");
    assert_eq!(profile.get("vanilla"), Some(4));
}

#[test]
fn test_unresolved_names_change_nothing() {
    let catalog = CatalogStore::builtin();
    let with_noise = collection(MIXED);
    let known: Vec<&str> = MIXED
        .iter()
        .copied()
        .filter(|n| catalog.contains(n))
        .collect();
    let clean = collection(&known);

    let noisy = ProfileEngine::new(&with_noise, &catalog).analyze();
    let plain = ProfileEngine::new(&clean, &catalog).analyze();
    assert_eq!(noisy.profile, plain.profile);
    assert_eq!(noisy.suggestions, plain.suggestions);
    assert_eq!(noisy.unresolved, vec!["Unknown Attar", "unknown attar"]);
    for s in &noisy.suggestions {
        assert!(catalog.contains(&s.base) && catalog.contains(&s.top));
    }
}

#[test]
fn test_suggestions_are_exact_intersections_without_self_pairs() {
    let catalog = CatalogStore::builtin();
    let c = collection(MIXED);
    let suggestions = ProfileEngine::new(&c, &catalog).compute_layering_suggestions();
    assert!(!suggestions.is_empty());

    for s in &suggestions {
        assert_ne!(s.base, s.top);
        let base: BTreeSet<String> = catalog.get(&s.base).unwrap().profile.iter().cloned().collect();
        let top: BTreeSet<String> = catalog.get(&s.top).unwrap().profile.iter().cloned().collect();
        let expected: BTreeSet<String> = base.intersection(&top).cloned().collect();
        assert!(!s.shared_notes.is_empty());
        assert_eq!(s.shared_notes, expected);
    }
}

#[test]
fn test_suggestions_follow_collection_order_in_both_directions() {
    let catalog = CatalogStore::builtin();
    let c = collection(&["Parfums de Marly Herod", "YSL Tuxedo", "Parfums de Marly Layton"]);
    let keys: Vec<String> = ProfileEngine::new(&c, &catalog)
        .compute_layering_suggestions()
        .iter()
        .map(|s| s.combo_key())
        .collect();
    assert_eq!(
        keys,
        vec![
            "Parfums de Marly Herod + YSL Tuxedo",
            "Parfums de Marly Herod + Parfums de Marly Layton",
            "YSL Tuxedo + Parfums de Marly Herod",
            "YSL Tuxedo + Parfums de Marly Layton",
            "Parfums de Marly Layton + Parfums de Marly Herod",
            "Parfums de Marly Layton + YSL Tuxedo",
        ]
    );
}

#[test]
fn test_repeated_analysis_is_identical() {
    let catalog = CatalogStore::builtin();
    let c = collection(MIXED);
    let engine = ProfileEngine::new(&c, &catalog);
    assert_eq!(engine.compute_note_profile(), engine.compute_note_profile());
    assert_eq!(engine.compute_layering_suggestions(), engine.compute_layering_suggestions());
}

#[test]
fn test_empty_collection() {
    let catalog = CatalogStore::builtin();
    let c = UserCollection::parse("\n  \n");
    let analysis = ProfileEngine::new(&c, &catalog).analyze();
    assert!(analysis.profile.is_empty());
    assert!(analysis.suggestions.is_empty());
    assert!(analysis.unresolved.is_empty());
}

#[test]
fn test_analysis_serializes_for_reports() {
    let catalog = CatalogStore::builtin();
    let c = collection(&["Dior Sauvage EDT", "Dior Sauvage EDP"]);
    let json = serde_json::to_value(ProfileEngine::new(&c, &catalog).analyze()).unwrap();

    assert_eq!(json["profile"][0]["note"], "bergamot");
    assert_eq!(json["profile"][0]["count"], 2);
    assert_eq!(json["suggestions"][0]["base"], "Dior Sauvage EDT");
    assert_eq!(json["suggestions"][0]["shared_notes"][0], "bergamot");
}
