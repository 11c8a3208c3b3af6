use showgo_core::{CategoryFilter, EventRepository, EventService, ManualClock, MemStore, NewEvent};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

fn new_event(name: &str, category: &str) -> NewEvent {
    NewEvent {
        name: name.to_string(),
        description: "desc".to_string(),
        location: "Austin, TX".to_string(),
        venue: "The Mohawk".to_string(),
        date: "November 1".to_string(),
        time: "9:00 PM".to_string(),
        category: category.to_string(),
        tags: None,
        image_url: "https://example.com/show.jpg".to_string(),
    }
}

#[test]
fn create_assigns_fresh_id_visible_afterwards() {
    let store = MemStore::new();
    let first = store.create_event(new_event("First", "Rock"));

    let before: HashSet<Uuid> = store.list_events().iter().map(|e| e.id).collect();
    let created = store.create_event(new_event("Second", "Jazz"));

    assert!(!before.contains(&created.id));
    assert_ne!(created.id, first.id);
    assert_eq!(store.get_event(created.id).unwrap(), created);
}

#[test]
fn missing_tags_default_to_empty_and_given_tags_keep_order() {
    let store = MemStore::new();
    let untagged = store.create_event(new_event("Plain", "Rock"));
    assert!(untagged.tags.is_empty());

    let mut input = new_event("Tagged", "Rock");
    input.tags = Some(vec!["b".to_string(), "a".to_string(), "b".to_string()]);
    let tagged = store.create_event(input);
    assert_eq!(tagged.tags, vec!["b", "a", "b"]);
}

#[test]
fn created_at_comes_from_clock() {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let store = MemStore::with_clock(clock.clone());

    let event = store.create_event(new_event("Clocked", "Jazz"));
    assert_eq!(event.created_at, 1_700_000_000_000);
}

#[test]
fn list_orders_by_created_at_then_insertion() {
    let clock = Arc::new(ManualClock::new(5_000));
    let store = MemStore::with_clock(clock.clone());

    let late = store.create_event(new_event("late", "Rock"));
    clock.set(1_000);
    let tie_a = store.create_event(new_event("tie-a", "Rock"));
    let tie_b = store.create_event(new_event("tie-b", "Jazz"));
    let tie_c = store.create_event(new_event("tie-c", "Rock"));
    clock.set(3_000);
    let middle = store.create_event(new_event("middle", "Jazz"));

    let ids: Vec<Uuid> = store.list_events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![tie_a.id, tie_b.id, tie_c.id, middle.id, late.id]);
}

#[test]
fn list_length_tracks_creates() {
    let store = MemStore::new();
    assert!(store.list_events().is_empty());
    for index in 0..5 {
        store.create_event(new_event(&format!("show {index}"), "Rock"));
    }
    assert_eq!(store.list_events().len(), 5);
    assert_eq!(store.event_count(), 5);
}

#[test]
fn get_event_is_idempotent_and_missing_is_none() {
    let store = MemStore::with_sample_events();
    let target = store.list_events()[3].clone();

    let first = store.get_event(target.id);
    let second = store.get_event(target.id);
    assert_eq!(first, second);
    assert_eq!(first.unwrap(), target);

    assert!(store.get_event(Uuid::new_v4()).is_none());
    assert!(store.get_event(Uuid::nil()).is_none());
}

#[test]
fn returned_records_are_copies() {
    let store = MemStore::new();
    let mut created = store.create_event(new_event("Original", "Rock"));
    created.name = "Mutated".to_string();

    assert_eq!(store.get_event(created.id).unwrap().name, "Original");
}

#[test]
fn seeded_store_lists_eight_in_declared_order() {
    let store = MemStore::with_sample_events();
    let events = store.list_events();

    assert_eq!(events.len(), 8);
    assert_eq!(events.first().unwrap().name, "Rock Concert");
    assert_eq!(events.last().unwrap().name, "Indian Classical Music");
    assert_eq!(events[0].tags, vec!["Live", "Outdoor", "Guitar"]);
    let ids: HashSet<Uuid> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 8);
}

#[test]
fn test_show_scenario_lands_in_rock_listing() {
    let store = MemStore::with_sample_events();
    let service = EventService::new(&store);

    let created = service.create_event(new_event("Test Show", "Rock"));
    let all = service.list_events();
    assert_eq!(all.len(), 9);
    assert!(all
        .iter()
        .any(|e| e.id == created.id && e.name == "Test Show" && e.category == "Rock"));

    let rock: Vec<String> = service
        .list_events_in_category(&CategoryFilter::new("Rock"))
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(rock, vec!["Rock Concert", "Hard Rock Festival", "Test Show"]);
}

#[test]
fn concurrent_creates_keep_every_record() {
    let store = Arc::new(MemStore::new());
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for index in 0..25 {
                    store.create_event(new_event(&format!("w{worker}-{index}"), "Jazz"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let events = store.list_events();
    assert_eq!(events.len(), 100);
    let ids: HashSet<Uuid> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 100);
}
