use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{require, Command, CommandError};
use crate::members::dto::MemberDto;

pub struct RemoveMemberCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveMemberCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveMemberCommandRequest {
    pub membership_id: String,
}

impl RemoveMemberCommandRequest {
    pub fn new(membership_id: &str) -> Self {
        Self {
            membership_id: membership_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveMemberCommandResponse {
    pub member: MemberDto,
}

impl<'a> Command<RemoveMemberCommandRequest, RemoveMemberCommandResponse> for RemoveMemberCommand<'a> {
    fn execute(&mut self, req: RemoveMemberCommandRequest) -> Result<RemoveMemberCommandResponse, CommandError> {
        require("membership id", req.membership_id.as_str())?;
        self.catalog_service.remove_member(req.membership_id.as_str())
            .map_err(CommandError::from)
            .map(|member| RemoveMemberCommandResponse { member })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::members::command::remove_member_cmd::{RemoveMemberCommand, RemoveMemberCommandRequest};
    use crate::members::dto::MemberDto;

    #[test]
    fn test_should_reject_member_with_loans() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "111", "Science Fiction", 1)).expect("should add book");
        svc.add_member(&MemberDto::new("Ada", "ada@example.org", "M1")).expect("should add member");
        svc.borrow_book("M1", "111").expect("should borrow");

        let res = RemoveMemberCommand::new(svc.as_mut()).execute(RemoveMemberCommandRequest::new("M1"));
        match res {
            Err(err @ CommandError::Rejected { .. }) => assert!(err.to_string().ends_with("(1 open loan(s))")),
            other => panic!("unexpected {:?}", other),
        }

        svc.return_book("M1", "111").expect("should return");
        let res = RemoveMemberCommand::new(svc.as_mut()).execute(RemoveMemberCommandRequest::new("M1"))
            .expect("should remove member");
        assert_eq!("Ada", res.member.name.as_str());
    }
}
