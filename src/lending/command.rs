pub mod borrow_book_cmd;
pub mod overdue_report_cmd;
pub mod return_book_cmd;
