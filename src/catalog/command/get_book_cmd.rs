use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{require, Command, CommandError};

pub struct GetBookCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetBookCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'a> {
    fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        require("isbn", req.isbn.as_str())?;
        self.catalog_service.search_by_isbn(req.isbn.as_str())
            .map(GetBookCommandResponse::new)
            .ok_or_else(|| CommandError::NotFound { message: format!("book with isbn {} not found", req.isbn) })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_get_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "111", "Science Fiction", 1)).expect("should add book");
        let mut cmd = GetBookCommand::new(svc.as_ref());
        let res = cmd.execute(GetBookCommandRequest::new("111")).expect("should get book");
        assert_eq!("Dune", res.book.title.as_str());
        let res = cmd.execute(GetBookCommandRequest::new("999"));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
