//! In-memory event collection.

use serde::Serialize;

use crate::error::Rejection;
use crate::event::Event;

/// Events ordered most-recently-added first. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// Put `event` at the front of the store.
    pub fn add(&mut self, event: Event) -> Result<&Event, Rejection> {
        if self.contains(&event.id) {
            return Err(Rejection::DuplicateEventId(event.id));
        }
        self.events.insert(0, event);
        Ok(&self.events[0])
    }

    /// Remove and return the event with `id`, if there is one.
    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::participant::ParticipantSet;
    use chrono::{TimeZone, Utc};

    fn event(id: &str) -> Event {
        let start = Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap();
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: String::new(),
            category: Category::Errands,
            location: String::new(),
            start,
            end: start,
            participants: ParticipantSet::both(),
        }
    }

    #[test]
    fn newest_first() {
        let mut store = EventStore::new();
        store.add(event("a")).unwrap();
        store.add(event("b")).unwrap();
        store.add(event("c")).unwrap();

        let ids: Vec<_> = store.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = EventStore::new();
        store.add(event("a")).unwrap();

        let err = store.add(event("a")).unwrap_err();
        assert_eq!(err, Rejection::DuplicateEventId("a".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_returns_event_and_keeps_order() {
        let mut store = EventStore::new();
        for id in ["a", "b", "c"] {
            store.add(event(id)).unwrap();
        }

        let removed = store.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<_> = store.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut store = EventStore::new();
        store.add(event("a")).unwrap();
        let before = store.clone();

        assert!(store.remove("zzz").is_none());
        assert_eq!(store, before);
    }
}
