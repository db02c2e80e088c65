use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::lending::dto::OverdueLoanDto;

pub struct OverdueReportCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> OverdueReportCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct OverdueReportCommandRequest {}

#[derive(Debug, Serialize)]
pub struct OverdueReportCommandResponse {
    pub overdue: Vec<OverdueLoanDto>,
}

impl<'a> Command<OverdueReportCommandRequest, OverdueReportCommandResponse> for OverdueReportCommand<'a> {
    fn execute(&mut self, _req: OverdueReportCommandRequest) -> Result<OverdueReportCommandResponse, CommandError> {
        Ok(OverdueReportCommandResponse { overdue: self.catalog_service.list_overdue() })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use crate::books::dto::BookDto;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::lending::command::overdue_report_cmd::{OverdueReportCommand, OverdueReportCommandRequest};
    use crate::members::dto::MemberDto;
    use crate::utils::date::FixedClock;

    #[test]
    fn test_should_run_overdue_report() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 0, 0).unwrap());
        let mut svc = factory::create_catalog_service_with_clock(
            &Configuration::new("test"), Box::new(clock.clone()), GatewayPublisherVia::Disabled);
        svc.add_book(&BookDto::new("Dune", "Frank Herbert", "111", "Science Fiction", 1)).expect("should add book");
        svc.add_member(&MemberDto::new("Ada", "ada@example.org", "M1")).expect("should add member");
        svc.borrow_book("M1", "111").expect("should borrow");

        let mut cmd = OverdueReportCommand::new(svc.as_ref());
        assert!(cmd.execute(OverdueReportCommandRequest::default()).expect("should report").overdue.is_empty());
        clock.advance(Duration::days(15));
        let res = cmd.execute(OverdueReportCommandRequest::default()).expect("should report");
        assert_eq!(1, res.overdue.len());
        assert_eq!(1, res.overdue[0].days_overdue);
        assert_eq!("ada@example.org", res.overdue[0].member_contact.as_str());
    }
}
