use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{require, Command, CommandError};
use crate::members::dto::MemberDto;

pub struct UpdateMemberCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateMemberCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMemberCommandRequest {
    pub membership_id: String,
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl UpdateMemberCommandRequest {
    pub fn new(membership_id: &str, name: Option<&str>, contact: Option<&str>) -> Self {
        Self {
            membership_id: membership_id.to_string(),
            name: name.map(str::to_string),
            contact: contact.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateMemberCommandResponse {
    pub member: MemberDto,
}

impl UpdateMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

impl<'a> Command<UpdateMemberCommandRequest, UpdateMemberCommandResponse> for UpdateMemberCommand<'a> {
    fn execute(&mut self, req: UpdateMemberCommandRequest) -> Result<UpdateMemberCommandResponse, CommandError> {
        require("membership id", req.membership_id.as_str())?;
        self.catalog_service.update_member(req.membership_id.as_str(), req.name.as_deref(), req.contact.as_deref())
            .map_err(CommandError::from)
            .map(UpdateMemberCommandResponse::new)
    }
}
