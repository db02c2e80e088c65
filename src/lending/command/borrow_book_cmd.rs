use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{require, Command, CommandError};
use crate::lending::dto::BorrowReceiptDto;

pub struct BorrowBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub membership_id: String,
    pub isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(membership_id: &str, isbn: &str) -> Self {
        Self {
            membership_id: membership_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub receipt: BorrowReceiptDto,
}

impl<'a> Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'a> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        require("membership id", req.membership_id.as_str())?;
        require("isbn", req.isbn.as_str())?;
        self.catalog_service.borrow_book(req.membership_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from)
            .map(|receipt| BorrowBookCommandResponse { receipt })
    }
}
