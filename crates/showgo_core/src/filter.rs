//! Category filter over event listings.
//!
//! # Invariants
//! - The `All` sentinel returns the input unchanged.
//! - Any other category keeps exactly the events whose `category` equals it
//!   (case-sensitive), in their original relative order.
//! - Filtering is pure and idempotent.

use crate::model::event::Event;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sentinel category meaning "no filter applied".
pub const ALL_CATEGORIES: &str = "All";

/// Category chips offered by the listing page, sentinel first.
pub const KNOWN_CATEGORIES: [&str; 5] = [ALL_CATEGORIES, "Rock", "Jazz", "India", "Classical"];

/// Parsed category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn new(category: &str) -> Self {
        if category == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(category.to_string())
        }
    }

    /// Returns whether `event` passes this selection.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => event.category == *category,
        }
    }

    /// Selects matching events from `events`, preserving order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        match self {
            Self::All => events.to_vec(),
            Self::Only(_) => events
                .iter()
                .filter(|event| self.matches(event))
                .cloned()
                .collect(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value))
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Returns the events shown for `category`.
pub fn filter_events(events: &[Event], category: &str) -> Vec<Event> {
    CategoryFilter::new(category).apply(events)
}
