use std::io;
use tracing::info;
use circulation::catalog::factory::create_catalog_service;
use circulation::core::domain::Configuration;
use circulation::shell::menu::Shell;
use circulation::utils::logging::setup_tracing;

fn main() -> io::Result<()> {
    let config = Configuration::from_env();
    setup_tracing(&config);
    info!(branch = config.branch_id.as_str(), loan_days = config.book_loan_days, "opening the front desk");

    let catalog = create_catalog_service(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(catalog, stdin.lock(), stdout.lock());
    shell.run()
}
