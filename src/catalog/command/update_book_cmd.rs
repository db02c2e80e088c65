use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::BookChanges;
use crate::core::command::{require, Command, CommandError};

pub struct UpdateBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Fields left as None, or given as empty text, keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub isbn: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub quantity: Option<i64>,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: None,
            author: None,
            genre: None,
            quantity: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn build_changes(&self) -> BookChanges {
        BookChanges {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
    pub quantity_error: Option<String>,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto, quantity_error: Option<String>) -> Self {
        Self {
            book,
            quantity_error,
        }
    }
}

impl<'a> Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand<'a> {
    fn execute(&mut self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        require("isbn", req.isbn.as_str())?;
        self.catalog_service.update_book(req.isbn.as_str(), &req.build_changes())
            .map_err(CommandError::from)
            .map(|res| UpdateBookCommandResponse::new(res.book, res.quantity_error.map(|err| err.to_string())))
    }
}
