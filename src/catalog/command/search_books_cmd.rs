use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::SearchCriteria;
use crate::core::command::{require, Command, CommandError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchBy {
    Title(String),
    Author(String),
    Genre(String),
    Advanced(SearchCriteria),
}

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub search_by: SearchBy,
}

impl SearchBooksCommandRequest {
    pub fn new(search_by: SearchBy) -> Self {
        Self {
            search_by,
        }
    }
}

// SearchBooksCommandResponse carries the matches along with their availability split.
#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub available: usize,
    pub unavailable: usize,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        let available = books.iter().filter(|b| b.is_available()).count();
        Self {
            unavailable: books.len() - available,
            available,
            books,
        }
    }
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = match &req.search_by {
            SearchBy::Title(term) => {
                require("title", term.as_str())?;
                self.catalog_service.search_by_title(term.as_str())
            }
            SearchBy::Author(term) => {
                require("author", term.as_str())?;
                self.catalog_service.search_by_author(term.as_str())
            }
            SearchBy::Genre(term) => {
                require("genre", term.as_str())?;
                self.catalog_service.search_by_genre(term.as_str())
            }
            SearchBy::Advanced(criteria) => {
                if criteria.is_empty() {
                    return Err(CommandError::validation("please provide at least one search criterion"));
                }
                self.catalog_service.advanced_search(criteria)
            }
        }.map_err(CommandError::from)?;
        Ok(SearchBooksCommandResponse::new(books))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBy};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::dto::SearchCriteria;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn seeded() -> Box<dyn CatalogService> {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(&BookDto::new("The Hobbit", "J.R.R. Tolkien", "111", "Fantasy", 1)).expect("should add book");
        svc.add_book(&BookDto::new("The Silmarillion", "J.R.R. Tolkien", "222", "Fantasy", 0)).expect("should add book");
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "333", "Science Fiction", 3)).expect("should add book");
        svc
    }

    #[test]
    fn test_should_count_availability_of_matches() {
        let svc = seeded();
        let mut cmd = SearchBooksCommand::new(svc.as_ref());
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchBy::Author("tolkien".to_string()))).expect("should search");
        assert_eq!(2, res.books.len());
        assert_eq!(1, res.available);
        assert_eq!(1, res.unavailable);
    }

    #[test]
    fn test_should_run_advanced_search() {
        let svc = seeded();
        let mut cmd = SearchBooksCommand::new(svc.as_ref());
        let criteria = SearchCriteria { title: Some("the".to_string()), genre: Some("FANTASY".to_string()), author: None };
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchBy::Advanced(criteria))).expect("should search");
        assert_eq!(2, res.books.len());
    }

    #[test]
    fn test_should_reject_empty_search() {
        let svc = seeded();
        let mut cmd = SearchBooksCommand::new(svc.as_ref());
        let criteria = SearchCriteria { title: Some("".to_string()), ..Default::default() };
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchBy::Advanced(criteria)));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        let res = cmd.execute(SearchBooksCommandRequest::new(SearchBy::Genre(" ".to_string())));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
