use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::members::factory::create_member_repository;
use crate::utils::date::{Clock, SystemClock};

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    create_catalog_service_with_clock(config, Box::new(SystemClock), GatewayPublisherVia::Logs)
}

pub fn create_catalog_service_with_clock(config: &Configuration, clock: Box<dyn Clock>,
                                         via: GatewayPublisherVia) -> Box<dyn CatalogService> {
    let book_repo = create_book_repository();
    let member_repo = create_member_repository();
    let publisher = create_publisher(via);
    Box::new(CatalogServiceImpl::new(config, book_repo, member_repo, publisher, clock))
}
