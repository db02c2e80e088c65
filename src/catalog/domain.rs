pub mod service;

use crate::books::dto::BookDto;
use crate::catalog::dto::{BookChanges, BookUpdateDto, LibraryStatsDto, SearchCriteria};
use crate::core::library::LibraryResult;
use crate::lending::dto::{BorrowReceiptDto, LoanHistoryDto, OverdueLoanDto, ReturnReceiptDto};
use crate::members::dto::MemberDto;

// CatalogService owns the books, the members and the loans between them.
pub trait CatalogService {
    // books
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn update_book(&mut self, isbn: &str, changes: &BookChanges) -> LibraryResult<BookUpdateDto>;
    fn find_book_by_isbn(&self, isbn: &str) -> Option<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
    fn available_books(&self) -> Vec<BookDto>;
    fn unavailable_books(&self) -> Vec<BookDto>;

    // members
    fn add_member(&mut self, member: &MemberDto) -> LibraryResult<MemberDto>;
    fn remove_member(&mut self, membership_id: &str) -> LibraryResult<MemberDto>;
    fn update_member(&mut self, membership_id: &str, name: Option<&str>, contact: Option<&str>) -> LibraryResult<MemberDto>;
    fn find_member_by_id(&self, membership_id: &str) -> Option<MemberDto>;
    fn list_members(&self) -> Vec<MemberDto>;

    // lending
    fn borrow_book(&mut self, membership_id: &str, isbn: &str) -> LibraryResult<BorrowReceiptDto>;
    fn return_book(&mut self, membership_id: &str, isbn: &str) -> LibraryResult<ReturnReceiptDto>;
    fn list_overdue(&self) -> Vec<OverdueLoanDto>;
    fn member_history(&self, membership_id: &str) -> LibraryResult<Vec<LoanHistoryDto>>;

    // search
    fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    fn search_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    fn search_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>>;
    fn search_by_isbn(&self, isbn: &str) -> Option<BookDto>;
    fn advanced_search(&self, criteria: &SearchCriteria) -> LibraryResult<Vec<BookDto>>;

    // reports
    fn stats(&self) -> LibraryStatsDto;
}
