use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{require, Command, CommandError};
use crate::lending::dto::ReturnReceiptDto;

pub struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub membership_id: String,
    pub isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(membership_id: &str, isbn: &str) -> Self {
        Self {
            membership_id: membership_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub receipt: ReturnReceiptDto,
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        require("membership id", req.membership_id.as_str())?;
        require("isbn", req.isbn.as_str())?;
        self.catalog_service.return_book(req.membership_id.as_str(), req.isbn.as_str())
            .map_err(CommandError::from)
            .map(|receipt| ReturnBookCommandResponse { receipt })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use crate::books::dto::BookDto;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::members::dto::MemberDto;
    use crate::utils::date::FixedClock;

    #[test]
    fn test_should_run_return_book() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 0, 0).unwrap());
        let mut svc = factory::create_catalog_service_with_clock(
            &Configuration::new("test"), Box::new(clock.clone()), GatewayPublisherVia::Disabled);
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "111", "Science Fiction", 1)).expect("should add book");
        svc.add_member(&MemberDto::new("Ada", "ada@example.org", "M1")).expect("should add member");
        svc.borrow_book("M1", "111").expect("should borrow");
        clock.advance(Duration::days(16));

        let mut cmd = ReturnBookCommand::new(svc.as_mut());
        let res = cmd.execute(ReturnBookCommandRequest::new("M1", "111")).expect("should return");
        assert_eq!(Some(2), res.receipt.days_overdue);
        let res = cmd.execute(ReturnBookCommandRequest::new("M1", "111"));
        assert!(matches!(res, Err(CommandError::Rejected { retryable: false, .. })));
    }
}
