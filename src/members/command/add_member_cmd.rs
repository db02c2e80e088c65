use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{require, Command, CommandError};
use crate::members::dto::MemberDto;

pub struct AddMemberCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddMemberCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMemberCommandRequest {
    pub name: String,
    pub contact: String,
    pub membership_id: String,
}

impl AddMemberCommandRequest {
    pub fn new(name: &str, contact: &str, membership_id: &str) -> Self {
        Self {
            name: name.to_string(),
            contact: contact.to_string(),
            membership_id: membership_id.to_string(),
        }
    }

    pub fn build_member(&self) -> Result<MemberDto, CommandError> {
        require("name", self.name.as_str())?;
        require("contact", self.contact.as_str())?;
        require("membership id", self.membership_id.as_str())?;
        Ok(MemberDto::new(self.name.as_str(), self.contact.as_str(), self.membership_id.as_str()))
    }
}

#[derive(Debug, Serialize)]
pub struct AddMemberCommandResponse {
    pub member: MemberDto,
}

impl AddMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

impl<'a> Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand<'a> {
    fn execute(&mut self, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        let member = req.build_member()?;
        self.catalog_service.add_member(&member).map_err(CommandError::from).map(AddMemberCommandResponse::new)
    }
}
