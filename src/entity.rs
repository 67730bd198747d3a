//! Supported entities
//!
//! The adapter serves one flat collection per entity. The registry is built
//! once at startup and only read afterwards.

use std::collections::HashMap;

/// External ID of the PagerDuty teams collection
pub const TEAMS: &str = "teams";

/// Entity specific information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// External ID of the attribute that uniquely identifies a record
    pub unique_id_attribute: String,
}

impl Entity {
    /// Create an entity keyed by the given unique ID attribute
    pub fn new(unique_id_attribute: impl Into<String>) -> Self {
        Self {
            unique_id_attribute: unique_id_attribute.into(),
        }
    }
}

/// Immutable table of entities this adapter can query
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: HashMap<String, Entity>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The entities PagerDuty exposes through this adapter
    pub fn pagerduty() -> Self {
        Self::new().with_entity(TEAMS, Entity::new("id"))
    }

    /// Add an entity, replacing any previous entry with the same external ID
    #[must_use]
    pub fn with_entity(mut self, external_id: impl Into<String>, entity: Entity) -> Self {
        self.entities.insert(external_id.into(), entity);
        self
    }

    /// Look up an entity by external ID
    pub fn get(&self, external_id: &str) -> Option<&Entity> {
        self.entities.get(external_id)
    }

    /// Check whether an entity is supported
    pub fn contains(&self, external_id: &str) -> bool {
        self.entities.contains_key(external_id)
    }

    /// Supported entities sorted by external ID
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entity)> {
        let mut entries: Vec<_> = self
            .entities
            .iter()
            .map(|(id, entity)| (id.as_str(), entity))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }

    /// Number of supported entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
