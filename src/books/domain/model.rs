use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::memory::Versioned;

// BookEntity abstracts a catalog title; quantity counts the copies still on the shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub quantity: i64,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, genre: &str, quantity: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            quantity,
        }
    }

    pub fn set_quantity(&mut self, quantity: i64) -> LibraryResult<()> {
        if quantity < 0 {
            return Err(LibraryError::invalid_value(
                format!("quantity cannot be negative, got {} for book {}", quantity, self.isbn).as_str(),
                Some("negative_quantity".to_string())));
        }
        self.quantity = quantity;
        Ok(())
    }

    // An empty value counts as "not provided": a title, author or genre is never cleared.
    pub fn update_details(&mut self, title: Option<&str>, author: Option<&str>, genre: Option<&str>) {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.title = title.to_string();
        }
        if let Some(author) = author.filter(|a| !a.is_empty()) {
            self.author = author.to_string();
        }
        if let Some(genre) = genre.filter(|g| !g.is_empty()) {
            self.genre = genre.to_string();
        }
    }

    pub(crate) fn take_copy(&mut self) -> LibraryResult<()> {
        if !self.is_available() {
            return Err(LibraryError::unavailable(
                format!("book '{}' is currently unavailable", self.title).as_str()));
        }
        self.set_quantity(self.quantity - 1)
    }

    pub(crate) fn put_back_copy(&mut self) -> LibraryResult<()> {
        let quantity = self.quantity.checked_add(1).ok_or_else(|| LibraryError::invalid_value(
            format!("book {} already holds the maximum number of copies", self.isbn).as_str(),
            Some("quantity_overflow".to_string())))?;
        self.set_quantity(quantity)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Versioned for BookEntity {
    fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.quantity > 0
    }

    fn status(&self) -> BookStatus {
        BookStatus::from_quantity(self.quantity)
    }
}
