use showgo_core::{filter_events, CategoryFilter, EventRepository, MemStore, KNOWN_CATEGORIES};

#[test]
fn all_returns_input_unchanged() {
    let events = MemStore::with_sample_events().list_events();
    assert_eq!(filter_events(&events, "All"), events);
    assert!(filter_events(&[], "All").is_empty());
}

#[test]
fn category_keeps_only_matches_in_order() {
    let events = MemStore::with_sample_events().list_events();

    let jazz = filter_events(&events, "Jazz");
    let names: Vec<&str> = jazz.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Jazz Night", "Jazz Fusion"]);
    assert!(jazz.iter().all(|e| e.category == "Jazz"));
}

#[test]
fn unknown_or_miscased_category_yields_empty() {
    let events = MemStore::with_sample_events().list_events();
    assert!(filter_events(&events, "Pop").is_empty());
    assert!(filter_events(&events, "rock").is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let events = MemStore::with_sample_events().list_events();
    for category in KNOWN_CATEGORIES {
        let once = filter_events(&events, category);
        assert_eq!(filter_events(&once, category), once);
    }
}

#[test]
fn known_categories_cover_the_seed_data() {
    let events = MemStore::with_sample_events().list_events();
    let total: usize = KNOWN_CATEGORIES[1..]
        .iter()
        .map(|category| filter_events(&events, category).len())
        .sum();
    assert_eq!(total, events.len());
}

#[test]
fn filter_matches_single_event() {
    let events = MemStore::with_sample_events().list_events();
    let india = CategoryFilter::new("India");
    assert!(india.matches(&events[3]));
    assert!(!india.matches(&events[0]));
    assert!(CategoryFilter::All.matches(&events[0]));
}
