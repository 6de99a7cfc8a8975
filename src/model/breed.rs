//! Breed records and the in-memory catalog that owns them

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// A single cat breed as returned by the breeds endpoint
///
/// Only the fields the application shows are kept; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub name: String,
    pub origin: String,
    pub temperament: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Breed {
    pub fn new(name: &str, origin: &str, temperament: &str) -> Self {
        Self {
            name: name.to_string(),
            origin: origin.to_string(),
            temperament: temperament.to_string(),
            description: None,
        }
    }

    /// Description text for read-only display
    pub fn description_label(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }
}

/// New values for the four editable fields of a breed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedEdit {
    pub name: String,
    pub origin: String,
    pub temperament: String,
    pub description: String,
}

/// Identifier handed out by the catalog when a record is loaded
///
/// Records are only created at load time, so ids are never reused and a
/// stale id simply stops resolving once its record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record together with its catalog id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: RecordId,
    pub breed: Breed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("record {0} no longer exists")]
    UnknownRecord(RecordId),
}

/// Origin selection for the catalog table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OriginFilter {
    #[default]
    All,
    Origin(String),
}

impl OriginFilter {
    pub fn label(&self) -> &str {
        match self {
            OriginFilter::All => "All origins",
            OriginFilter::Origin(origin) => origin,
        }
    }

    pub fn matches(&self, breed: &Breed) -> bool {
        match self {
            OriginFilter::All => true,
            OriginFilter::Origin(origin) => breed.origin == *origin,
        }
    }
}

/// Ordered, owned list of breed records
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Build a catalog, assigning ids in response order
    pub fn from_breeds(breeds: Vec<Breed>) -> Self {
        let entries: Vec<Entry> = breeds
            .into_iter()
            .enumerate()
            .map(|(i, breed)| Entry {
                id: RecordId(i),
                breed,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: RecordId) -> Option<&Breed> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.breed)
    }

    /// Entries matching the filter, in catalog order
    pub fn filtered(&self, filter: &OriginFilter) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(&e.breed))
            .collect()
    }

    /// Sorted set of distinct origins currently present
    pub fn origins(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.breed.origin.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Remove one record, returning it if it was present
    pub fn remove(&mut self, id: RecordId) -> Option<Breed> {
        let position = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(position).breed)
    }

    /// Overwrite the editable fields of one record
    pub fn update(&mut self, id: RecordId, edit: BreedEdit) -> Result<(), CatalogError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CatalogError::UnknownRecord(id))?;

        entry.breed.name = edit.name;
        entry.breed.origin = edit.origin;
        entry.breed.temperament = edit.temperament;
        entry.breed.description = Some(edit.description);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_breeds(vec![
        Breed::new("Abyssinian", "Egypt", "Active"),
        Breed::new("Persian", "Iran", "Calm"),
        Breed::new("Egyptian Mau", "Egypt", "Shy"),
        Breed::new("Bengal", "United States", "Alert"),
    ])
}
