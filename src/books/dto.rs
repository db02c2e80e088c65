use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub quantity: i64,
    pub book_status: BookStatus,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, genre: &str, quantity: i64) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            quantity,
            book_status: BookStatus::from_quantity(quantity),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn is_available(&self) -> bool {
        self.book_status == BookStatus::Available
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            quantity: other.quantity,
            book_status: other.status(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        let mut entity = BookEntity::new(other.title.as_str(), other.author.as_str(), other.isbn.as_str(),
                                         other.genre.as_str(), other.quantity);
        entity.version = other.version;
        entity
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_books() {
        let book = BookDto::new("The Hobbit", "J.R.R. Tolkien", "222", "Fantasy", 0);
        assert_eq!("222", book.isbn.as_str());
        assert_eq!(BookStatus::Unavailable, book.book_status);
        assert!(!book.is_available());
    }

    #[test]
    fn test_should_derive_status_from_entity() {
        let mut entity = BookEntity::new("The Hobbit", "J.R.R. Tolkien", "222", "Fantasy", 3);
        entity.version = 4;
        let dto = BookDto::from(&entity);
        assert_eq!(BookStatus::Available, dto.book_status);
        assert_eq!(4, dto.version);
        assert_eq!(entity, BookEntity::from(&dto));
    }
}
