//! In-memory event catalog.
//!
//! The catalog is built once at start-up and shared read-only between
//! requests. Insertion order is preserved and serves as the tie-breaker for
//! every stable ordering applied later.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::Event;

const SEED_CATALOG: &str = include_str!("../../data/events.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("event '{id}' is invalid: {reason}")]
    InvalidEvent { id: String, reason: String },

    #[error("duplicate event id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    events: Vec<Event>,
}

impl CatalogStore {
    /// Builds a catalog, rejecting records that violate event invariants.
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(events.len());

        for event in &events {
            event
                .check_invariants()
                .map_err(|reason| CatalogError::InvalidEvent {
                    id: event.id.clone(),
                    reason,
                })?;

            if !ids.insert(event.id.as_str()) {
                return Err(CatalogError::DuplicateId(event.id.clone()));
            }

            if let Some(allocated) = event.tier_overallocation() {
                warn!(
                    event_id = %event.id,
                    allocated,
                    capacity = event.capacity,
                    "Tier quantities exceed event capacity"
                );
            }
        }

        Ok(Self { events })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::new(events)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), events = catalog.len(), "Loaded catalog file");
        Ok(catalog)
    }

    /// The catalog bundled with the service.
    pub fn seeded() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SEED_CATALOG)?;
        info!(events = catalog.len(), "Loaded bundled seed catalog");
        Ok(catalog)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::fixtures::event;

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = CatalogStore::seeded().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("1").unwrap().title, "Summer Music Festival");
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = CatalogStore::new(vec![event("a", "music", &[]), event("b", "tech", &[])])
            .unwrap();
        assert_eq!(catalog.get("b").unwrap().category, "tech");
        assert!(catalog.get("c").is_none());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let catalog = CatalogStore::new(vec![
            event("z", "music", &[]),
            event("a", "music", &[]),
            event("m", "music", &[]),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = CatalogStore::new(vec![event("a", "music", &[]), event("a", "tech", &[])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_invalid_event_names_the_record() {
        let mut bad = event("broken", "music", &[]);
        bad.capacity = 0;
        bad.tickets_sold = 0;
        let err = CatalogStore::new(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let err = CatalogStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = CatalogStore::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
