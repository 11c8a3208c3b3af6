//! Output formatting for event listings.

use showgo_core::{CategoryFilter, Event};

const NAME_WIDTH: usize = 26;
const CATEGORY_WIDTH: usize = 10;
const WHEN_WIDTH: usize = 24;

/// Prints `events` as a table with a header.
pub fn print_table(events: &[Event]) {
    println!(
        "{:<36}  {:<NAME_WIDTH$}  {:<CATEGORY_WIDTH$}  {:<WHEN_WIDTH$}  VENUE",
        "ID", "NAME", "CATEGORY", "WHEN"
    );
    println!("{}", "-".repeat(36 + NAME_WIDTH + CATEGORY_WIDTH + WHEN_WIDTH + 20));
    for event in events {
        println!("{}", format_table_row(event));
    }
}

pub fn format_table_row(event: &Event) -> String {
    let when = format!("{} {}", event.date, event.time);
    format!(
        "{:<36}  {:<NAME_WIDTH$}  {:<CATEGORY_WIDTH$}  {:<WHEN_WIDTH$}  {}, {}",
        event.id,
        truncate(&event.name, NAME_WIDTH),
        truncate(&event.category, CATEGORY_WIDTH),
        truncate(&when, WHEN_WIDTH),
        event.venue,
        event.location
    )
}

/// Multi-line view of one event.
pub fn format_detail(event: &Event) -> String {
    let tags = if event.tags.is_empty() {
        "-".to_string()
    } else {
        event.tags.join(", ")
    };
    format!(
        "{name}\n  {description}\n  category: {category}\n  when:     {date} at {time}\n  where:    {venue}, {location}\n  tags:     {tags}\n  image:    {image}\n  id:       {id}",
        name = event.name,
        description = event.description,
        category = event.category,
        date = event.date,
        time = event.time,
        venue = event.venue,
        location = event.location,
        image = event.image_url,
        id = event.id,
    )
}

pub fn empty_listing_message(filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => {
            "No events scheduled at the moment. Check back soon for new shows!".to_string()
        }
        CategoryFilter::Only(category) => {
            format!("No {category} events available at the moment.")
        }
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let kept: String = value.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::{empty_listing_message, format_detail, truncate};
    use showgo_core::{sample_events, CategoryFilter, Event, EventId};

    #[test]
    fn truncate_respects_char_budget() {
        assert_eq!(truncate("Jazz", 10), "Jazz");
        assert_eq!(truncate("Classical Piano Recital", 10), "Classic...");
    }

    #[test]
    fn empty_message_names_the_category() {
        assert!(empty_listing_message(&CategoryFilter::All).contains("No events scheduled"));
        assert_eq!(
            empty_listing_message(&CategoryFilter::new("Jazz")),
            "No Jazz events available at the moment."
        );
    }

    #[test]
    fn detail_lists_tags() {
        let input = sample_events().into_iter().next().unwrap();
        let event = Event::from_new(EventId::nil(), input, 0);
        let detail = format_detail(&event);
        assert!(detail.starts_with("Rock Concert\n"));
        assert!(detail.contains("tags:     Live, Outdoor, Guitar"));
    }
}
