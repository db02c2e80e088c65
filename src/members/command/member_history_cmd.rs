use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{require, Command, CommandError};
use crate::lending::dto::LoanHistoryDto;
use crate::members::dto::MemberDto;

pub struct MemberHistoryCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> MemberHistoryCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemberHistoryCommandRequest {
    pub membership_id: String,
}

impl MemberHistoryCommandRequest {
    pub fn new(membership_id: &str) -> Self {
        Self {
            membership_id: membership_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberHistoryCommandResponse {
    pub member: MemberDto,
    pub history: Vec<LoanHistoryDto>,
}

impl<'a> Command<MemberHistoryCommandRequest, MemberHistoryCommandResponse> for MemberHistoryCommand<'a> {
    fn execute(&mut self, req: MemberHistoryCommandRequest) -> Result<MemberHistoryCommandResponse, CommandError> {
        require("membership id", req.membership_id.as_str())?;
        let history = self.catalog_service.member_history(req.membership_id.as_str())?;
        let member = self.catalog_service.find_member_by_id(req.membership_id.as_str())
            .ok_or_else(|| CommandError::NotFound { message: format!("member {} not found", req.membership_id) })?;
        Ok(MemberHistoryCommandResponse { member, history })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::LoanStatus;
    use crate::members::command::member_history_cmd::{MemberHistoryCommand, MemberHistoryCommandRequest};
    use crate::members::dto::MemberDto;

    #[test]
    fn test_should_run_member_history() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "111", "Science Fiction", 1)).expect("should add book");
        svc.add_member(&MemberDto::new("Ada", "ada@example.org", "M1")).expect("should add member");
        svc.borrow_book("M1", "111").expect("should borrow");

        let mut cmd = MemberHistoryCommand::new(svc.as_ref());
        let res = cmd.execute(MemberHistoryCommandRequest::new("M1")).expect("should build history");
        assert_eq!("Ada", res.member.name.as_str());
        assert_eq!(1, res.history.len());
        assert_eq!(LoanStatus::OnTime, res.history[0].loan_status);
        let res = cmd.execute(MemberHistoryCommandRequest::new("M2"));
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
