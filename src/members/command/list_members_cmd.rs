use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::members::dto::MemberDto;

pub struct ListMembersCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListMembersCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListMembersCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListMembersCommandResponse {
    pub members: Vec<MemberDto>,
}

impl<'a> Command<ListMembersCommandRequest, ListMembersCommandResponse> for ListMembersCommand<'a> {
    fn execute(&mut self, _req: ListMembersCommandRequest) -> Result<ListMembersCommandResponse, CommandError> {
        Ok(ListMembersCommandResponse { members: self.catalog_service.list_members() })
    }
}
