use indexmap::IndexMap;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryStore keeps records keyed by id in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct MemoryStore<E> {
    kind: String,
    records: IndexMap<String, E>,
}

pub(crate) trait Versioned {
    fn bump_version(&mut self);
}

impl<E: Identifiable + Versioned + Clone> MemoryStore<E> {
    pub(crate) fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            records: IndexMap::new(),
        }
    }

    pub(crate) fn create(&mut self, entity: &E) -> LibraryResult<usize> {
        let id = entity.id();
        if self.records.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("{} with id {} already exists", self.kind, id).as_str()));
        }
        self.records.insert(id, entity.clone());
        Ok(1)
    }

    pub(crate) fn update(&mut self, entity: &E) -> LibraryResult<usize> {
        let id = entity.id();
        let existing = self.records.get_mut(&id).ok_or_else(|| LibraryError::not_found(
            format!("{} with id {} not found", self.kind, id).as_str()))?;
        if existing.version() != entity.version() {
            return Err(LibraryError::runtime(
                format!("{} {} was modified concurrently, expected version {} but found {}",
                        self.kind, id, entity.version(), existing.version()).as_str(),
                Some("stale_version".to_string())));
        }
        let mut updated = entity.clone();
        updated.bump_version();
        *existing = updated;
        Ok(1)
    }

    pub(crate) fn get(&self, id: &str) -> LibraryResult<E> {
        self.records.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} with id {} not found", self.kind, id).as_str()))
    }

    // shift_remove keeps the relative order of the remaining records
    pub(crate) fn delete(&mut self, id: &str) -> LibraryResult<E> {
        self.records.shift_remove(id).ok_or_else(|| LibraryError::not_found(
            format!("{} with id {} not found", self.kind, id).as_str()))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item=&E> {
        self.records.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

// case-insensitive substring match, the empty term matches everything
pub(crate) fn contains_ignore_case(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term.to_lowercase().as_str())
}
