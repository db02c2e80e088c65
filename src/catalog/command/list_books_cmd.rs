use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BookListing {
    All,
    Available,
    Unavailable,
}

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub listing: BookListing,
}

impl ListBooksCommandRequest {
    pub fn new(listing: BookListing) -> Self {
        Self {
            listing,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub listing: BookListing,
    pub books: Vec<BookDto>,
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = match req.listing {
            BookListing::All => self.catalog_service.list_books(),
            BookListing::Available => self.catalog_service.available_books(),
            BookListing::Unavailable => self.catalog_service.unavailable_books(),
        };
        Ok(ListBooksCommandResponse { listing: req.listing, books })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::list_books_cmd::{BookListing, ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_list_books() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "111", "Science Fiction", 1)).expect("should add book");
        svc.add_book(&BookDto::new("Emma", "Jane Austen", "222", "Classic", 0)).expect("should add book");
        let mut cmd = ListBooksCommand::new(svc.as_ref());
        assert_eq!(2, cmd.execute(ListBooksCommandRequest::new(BookListing::All)).expect("should list").books.len());
        let available = cmd.execute(ListBooksCommandRequest::new(BookListing::Available)).expect("should list");
        assert_eq!("111", available.books[0].isbn.as_str());
        let unavailable = cmd.execute(ListBooksCommandRequest::new(BookListing::Unavailable)).expect("should list");
        assert_eq!("222", unavailable.books[0].isbn.as_str());
    }
}
