use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::LibraryStatsDto;
use crate::core::command::{Command, CommandError};

pub struct StatsCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> StatsCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct StatsCommandRequest {}

#[derive(Debug, Serialize)]
pub struct StatsCommandResponse {
    pub stats: LibraryStatsDto,
}

impl<'a> Command<StatsCommandRequest, StatsCommandResponse> for StatsCommand<'a> {
    fn execute(&mut self, _req: StatsCommandRequest) -> Result<StatsCommandResponse, CommandError> {
        Ok(StatsCommandResponse { stats: self.catalog_service.stats() })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::stats_cmd::{StatsCommand, StatsCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::members::dto::MemberDto;

    #[test]
    fn test_should_run_stats() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "111", "Science Fiction", 2)).expect("should add book");
        svc.add_book(&BookDto::new("Emma", "Jane Austen", "222", "Classic", 3)).expect("should add book");
        svc.add_member(&MemberDto::new("Ada", "ada@example.org", "M1")).expect("should add member");
        svc.borrow_book("M1", "222").expect("should borrow");
        let res = StatsCommand::new(svc.as_ref()).execute(StatsCommandRequest::default()).expect("should compute stats");
        assert_eq!(2, res.stats.unique_titles);
        assert_eq!(4, res.stats.total_copies);
        assert_eq!(1, res.stats.total_members);
        assert_eq!(1, res.stats.active_loans);
    }
}
