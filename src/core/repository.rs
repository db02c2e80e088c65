use std::collections::HashMap;
use crate::core::library::LibraryResult;

// Records are kept in insertion order; listing and searching rely on it.
pub trait Repository<Entity> {
    // create an entity, failing with DuplicateKey if its id is taken
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, the stored version must match the entity's version
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // all entities in insertion order
    fn find_all(&self) -> Vec<Entity>;

    // number of stored entities
    fn count(&self) -> usize;

    // entities matching every (field, term) pair of the predicate, in insertion order
    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;
}
