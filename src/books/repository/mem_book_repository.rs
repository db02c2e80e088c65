use std::collections::HashMap;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::memory::{contains_ignore_case, MemoryStore};

#[derive(Debug)]
pub(crate) struct MemBookRepository {
    store: MemoryStore<BookEntity>,
}

impl MemBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            store: MemoryStore::new("book"),
        }
    }
}

const QUERY_FIELDS: [&str; 4] = ["title", "author", "genre", "isbn"];

// title, author and genre match case-insensitive substrings, isbn matches exactly
fn matches(book: &BookEntity, field: &str, term: &str) -> bool {
    match field {
        "title" => contains_ignore_case(book.title.as_str(), term),
        "author" => contains_ignore_case(book.author.as_str(), term),
        "genre" => contains_ignore_case(book.genre.as_str(), term),
        _ => book.isbn == term,
    }
}

impl Repository<BookEntity> for MemBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        self.store.create(entity)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        self.store.update(entity)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.store.get(id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        self.store.delete(id)
    }

    fn find_all(&self) -> Vec<BookEntity> {
        self.store.iter().cloned().collect()
    }

    fn count(&self) -> usize {
        self.store.len()
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        if let Some(field) = predicate.keys().find(|k| !QUERY_FIELDS.contains(&k.as_str())) {
            return Err(LibraryError::validation(
                format!("books cannot be queried by {}", field).as_str(), Some("unknown_field".to_string())));
        }
        Ok(self.store.iter()
            .filter(|book| predicate.iter().all(|(field, term)| matches(book, field.as_str(), term.as_str())))
            .cloned()
            .collect())
    }
}

impl BookRepository for MemBookRepository {
    fn total_copies(&self) -> i128 {
        self.store.iter().map(|b| i128::from(b.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::mem_book_repository::MemBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    fn sut() -> MemBookRepository {
        let mut repo = MemBookRepository::new();
        repo.create(&BookEntity::new("The Hobbit", "J.R.R. Tolkien", "111", "Fantasy", 2)).expect("should create");
        repo.create(&BookEntity::new("Dune", "Frank Herbert", "222", "Science Fiction", 1)).expect("should create");
        repo.create(&BookEntity::new("The Silmarillion", "J.R.R. Tolkien", "333", "Fantasy", 0)).expect("should create");
        repo
    }

    fn titles(books: &[BookEntity]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_should_query_by_multiple_fields() {
        let repo = sut();
        let res = repo.query(&HashMap::from([
            ("author".to_string(), "tolkien".to_string()),
            ("title".to_string(), "SIL".to_string())])).expect("should query");
        assert_eq!(vec!["The Silmarillion"], titles(&res));
    }

    #[test]
    fn test_should_return_all_for_empty_predicate() {
        let repo = sut();
        let res = repo.query(&HashMap::new()).expect("should query");
        assert_eq!(vec!["The Hobbit", "Dune", "The Silmarillion"], titles(&res));
    }

    #[test]
    fn test_should_match_isbn_exactly() {
        let repo = sut();
        let res = repo.query(&HashMap::from([("isbn".to_string(), "11".to_string())])).expect("should query");
        assert!(res.is_empty());
    }

    #[test]
    fn test_should_reject_unknown_field() {
        let repo = sut();
        let res = repo.query(&HashMap::from([("publisher".to_string(), "x".to_string())]));
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_count_copies() {
        let repo = sut();
        assert_eq!(3, repo.count());
        assert_eq!(3, repo.total_copies());
    }

    #[test]
    fn test_should_count_copies_past_i64_range() {
        let mut repo = MemBookRepository::new();
        repo.create(&BookEntity::new("Dune", "Frank Herbert", "111", "Science Fiction", i64::MAX)).expect("should create");
        repo.create(&BookEntity::new("Emma", "Jane Austen", "222", "Classic", i64::MAX)).expect("should create");
        assert_eq!(2 * i128::from(i64::MAX), repo.total_copies());
    }
}
