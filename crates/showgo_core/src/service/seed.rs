//! Fixed sample events inserted at process start.
//!
//! # Invariants
//! - Seed records are inserted synchronously in declared order, so their
//!   listing order matches this table.

use crate::model::event::{Event, NewEvent};
use crate::repo::EventRepository;

struct SeedRow {
    name: &'static str,
    description: &'static str,
    location: &'static str,
    venue: &'static str,
    date: &'static str,
    time: &'static str,
    category: &'static str,
    tags: [&'static str; 3],
    image_url: &'static str,
}

const SAMPLE_EVENTS: [SeedRow; 8] = [
    SeedRow {
        name: "Rock Concert",
        description: "An electrifying night of rock music with epic performances.",
        location: "New York, NY",
        venue: "Madison Square Garden",
        date: "August 25",
        time: "8:00 PM",
        category: "Rock",
        tags: ["Live", "Outdoor", "Guitar"],
        image_url: "https://images.unsplash.com/photo-1498038432885-c6f3f1b912ee?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    SeedRow {
        name: "Jazz Night",
        description: "Join us for a smooth and soulful evening of jazz tunes.",
        location: "Los Angeles, CA",
        venue: "The Jazz Lounge",
        date: "September 10",
        time: "7:30 PM",
        category: "Jazz",
        tags: ["Smooth", "Intimate", "Saxophone"],
        image_url: "https://images.unsplash.com/photo-1511192336575-5a79af67a629?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    SeedRow {
        name: "Classical Symphony",
        description: "Experience the timeless beauty of classical music with a full orchestra.",
        location: "Boston, MA",
        venue: "Symphony Hall",
        date: "September 18",
        time: "7:00 PM",
        category: "Classical",
        tags: ["Orchestra", "Traditional", "Elegant"],
        image_url: "https://images.unsplash.com/photo-1465847899084-d164df4dedc6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    SeedRow {
        name: "Bollywood Night",
        description: "Dance to the vibrant rhythms of Bollywood music and celebrate Indian culture.",
        location: "San Francisco, CA",
        venue: "The Palace",
        date: "September 22",
        time: "8:00 PM",
        category: "India",
        tags: ["Dance", "Bollywood", "Cultural"],
        image_url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    SeedRow {
        name: "Hard Rock Festival",
        description: "The ultimate rock experience with legendary bands and emerging artists.",
        location: "Las Vegas, NV",
        venue: "The Arena",
        date: "October 5",
        time: "6:00 PM",
        category: "Rock",
        tags: ["Festival", "Heavy", "Live"],
        image_url: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    SeedRow {
        name: "Jazz Fusion",
        description: "An experimental blend of jazz with modern sounds and improvisation.",
        location: "Chicago, IL",
        venue: "Blue Note Jazz Club",
        date: "October 12",
        time: "9:00 PM",
        category: "Jazz",
        tags: ["Modern", "Experimental", "Improvisation"],
        image_url: "https://images.unsplash.com/photo-1415201364774-f6f0bb35f28f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    SeedRow {
        name: "Classical Piano Recital",
        description: "A masterful performance of classical piano works by renowned composers.",
        location: "New York, NY",
        venue: "Carnegie Hall",
        date: "October 20",
        time: "7:30 PM",
        category: "Classical",
        tags: ["Piano", "Solo", "Traditional"],
        image_url: "https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
    SeedRow {
        name: "Indian Classical Music",
        description: "Traditional Indian classical music featuring sitar and tabla performances.",
        location: "Seattle, WA",
        venue: "Cultural Center",
        date: "October 28",
        time: "7:00 PM",
        category: "India",
        tags: ["Traditional", "Sitar", "Tabla"],
        image_url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
    },
];

impl SeedRow {
    fn to_new_event(&self) -> NewEvent {
        NewEvent {
            name: self.name.to_string(),
            description: self.description.to_string(),
            location: self.location.to_string(),
            venue: self.venue.to_string(),
            date: self.date.to_string(),
            time: self.time.to_string(),
            category: self.category.to_string(),
            tags: Some(self.tags.iter().map(|tag| tag.to_string()).collect()),
            image_url: self.image_url.to_string(),
        }
    }
}

/// Returns the sample event payloads in declared order.
pub fn sample_events() -> Vec<NewEvent> {
    SAMPLE_EVENTS.iter().map(SeedRow::to_new_event).collect()
}

/// Inserts every sample event into `repo`, returning the created records.
pub fn seed_sample_events<R: EventRepository + ?Sized>(repo: &R) -> Vec<Event> {
    sample_events()
        .into_iter()
        .map(|input| repo.create_event(input))
        .collect()
}
