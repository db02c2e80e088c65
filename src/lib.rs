pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod lending;
pub mod members;
pub mod shell;
pub mod utils;
