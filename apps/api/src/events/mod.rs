//! Events calendar — college events, alumni meetups, webinars and fairs.
//!
//! Built once at startup and read-only afterwards, like the alumni directory.

use chrono::{DateTime, Utc};

use crate::models::event::Event;

pub mod handlers;
mod seed;

#[derive(Debug, Clone, Default)]
pub struct EventCalendar {
    events: Vec<Event>,
}

impl EventCalendar {
    /// Events are kept in date order; ties keep their given order.
    pub fn new(mut events: Vec<Event>) -> Self {
        events.sort_by_key(|e| e.date);
        Self { events }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_events())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events in date order. `category` compares as a slug; `from` drops
    /// events that start before it.
    pub fn list(&self, category: Option<&str>, from: Option<DateTime<Utc>>) -> Vec<&Event> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.events
            .iter()
            .filter(|e| category.map_or(true, |slug| e.category.matches_slug(slug)))
            .filter(|e| from.map_or(true, |start| e.date >= start))
            .collect()
    }
}
