use std::collections::HashMap;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;
use crate::utils::memory::{contains_ignore_case, MemoryStore};

#[derive(Debug)]
pub(crate) struct MemMemberRepository {
    store: MemoryStore<MemberEntity>,
}

impl MemMemberRepository {
    pub(crate) fn new() -> Self {
        Self {
            store: MemoryStore::new("member"),
        }
    }
}

const QUERY_FIELDS: [&str; 3] = ["name", "contact", "isbn"];

// "isbn" selects members currently holding a copy of that book
fn matches(member: &MemberEntity, field: &str, term: &str) -> bool {
    match field {
        "name" => contains_ignore_case(member.name.as_str(), term),
        "contact" => contains_ignore_case(member.contact.as_str(), term),
        _ => member.find_loan(term).is_some(),
    }
}

impl Repository<MemberEntity> for MemMemberRepository {
    fn create(&mut self, entity: &MemberEntity) -> LibraryResult<usize> {
        self.store.create(entity)
    }

    fn update(&mut self, entity: &MemberEntity) -> LibraryResult<usize> {
        self.store.update(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<MemberEntity> {
        self.store.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<MemberEntity> {
        self.store.delete(id)
    }

    fn find_all(&self) -> Vec<MemberEntity> {
        self.store.iter().cloned().collect()
    }

    fn count(&self) -> usize {
        self.store.len()
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<MemberEntity>> {
        if let Some(field) = predicate.keys().find(|k| !QUERY_FIELDS.contains(&k.as_str())) {
            return Err(LibraryError::validation(
                format!("members cannot be queried by {}", field).as_str(), Some("unknown_field".to_string())));
        }
        Ok(self.store.iter()
            .filter(|member| predicate.iter().all(|(field, term)| matches(member, field.as_str(), term.as_str())))
            .cloned()
            .collect())
    }
}

impl MemberRepository for MemMemberRepository {
    fn open_loans(&self) -> usize {
        self.store.iter().map(|m| m.loans.len()).sum()
    }
}
