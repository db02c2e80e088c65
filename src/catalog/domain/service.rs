use std::collections::HashMap;
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::{BookChanges, BookUpdateDto, LibraryStatsDto, SearchCriteria};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::lending::domain::model::LoanEntity;
use crate::lending::dto::{BorrowReceiptDto, LoanDto, LoanHistoryDto, OverdueLoanDto, ReturnReceiptDto};
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;
use crate::members::repository::MemberRepository;
use crate::utils::date::Clock;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_loan_days: i64,
    book_repository: Box<dyn BookRepository>,
    member_repository: Box<dyn MemberRepository>,
    events_publisher: Box<dyn EventPublisher>,
    clock: Box<dyn Clock>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      member_repository: Box<dyn MemberRepository>,
                      events_publisher: Box<dyn EventPublisher>, clock: Box<dyn Clock>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_loan_days: config.book_loan_days,
            book_repository,
            member_repository,
            events_publisher,
            clock,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch".to_string(), self.branch_id.to_string())])
    }

    fn publish<T, F>(&self, build: F, name: &str, group: &str, key: &str, data: &T) -> LibraryResult<()>
        where T: Serialize,
              F: Fn(&str, &str, &str, &HashMap<String, String>, &T, chrono::NaiveDateTime) -> serde_json::Result<DomainEvent> {
        let event = build(name, group, key, &self.metadata(), data, self.clock.now())?;
        self.events_publisher.publish(&event)
    }

    // title and author come from the catalog when the book is still there
    fn loan_dto(&self, loan: &LoanEntity) -> LoanDto {
        let mut dto = LoanDto::from(loan);
        if let Ok(book) = self.book_repository.get(loan.isbn.as_str()) {
            dto.title = book.title;
            dto.author = book.author;
        }
        dto
    }

    fn books_where(&self, available: bool) -> Vec<BookDto> {
        self.book_repository.find_all().iter()
            .filter(|b| b.is_available() == available)
            .map(BookDto::from)
            .collect()
    }

    fn search(&self, criteria: &SearchCriteria) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(&criteria.to_predicate())?;
        debug!(?criteria, matches = res.len(), "searched books");
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::from(book);
        if entity.quantity < 0 {
            return Err(LibraryError::invalid_value(
                format!("quantity cannot be negative, got {}", entity.quantity).as_str(),
                Some("negative_quantity".to_string())));
        }
        self.book_repository.create(&entity)?;
        let added = BookDto::from(&entity);
        self.publish(DomainEvent::added, "book_added", "books", added.isbn.as_str(), &added)?;
        info!(isbn = added.isbn.as_str(), title = added.title.as_str(), "book added");
        Ok(added)
    }

    // Outstanding loans do not block removal, they keep their title snapshot.
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        let removed = BookDto::from(&self.book_repository.delete(isbn)?);
        let holders = self.member_repository.query(
            &HashMap::from([("isbn".to_string(), isbn.to_string())]))?;
        if !holders.is_empty() {
            warn!(isbn, holders = holders.len(), "removed book still has copies on loan");
        }
        self.publish(DomainEvent::deleted, "book_removed", "books", isbn, &removed)?;
        info!(isbn, title = removed.title.as_str(), "book removed");
        Ok(removed)
    }

    fn update_book(&mut self, isbn: &str, changes: &BookChanges) -> LibraryResult<BookUpdateDto> {
        let mut book = self.book_repository.get(isbn)?;
        book.update_details(changes.title.as_deref(), changes.author.as_deref(), changes.genre.as_deref());
        let quantity_error = match changes.quantity {
            Some(quantity) => book.set_quantity(quantity).err(),
            None => None,
        };
        if let Some(err) = &quantity_error {
            warn!(isbn, %err, "quantity update rejected");
        }
        self.book_repository.update(&book)?;
        let updated = BookDto::from(&self.book_repository.get(isbn)?);
        self.publish(DomainEvent::updated, "book_updated", "books", isbn, &updated)?;
        info!(isbn, "book updated");
        Ok(BookUpdateDto { book: updated, quantity_error })
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        self.book_repository.get(isbn).ok().map(|b| BookDto::from(&b))
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.book_repository.find_all().iter().map(BookDto::from).collect()
    }

    fn available_books(&self) -> Vec<BookDto> {
        self.books_where(true)
    }

    fn unavailable_books(&self) -> Vec<BookDto> {
        self.books_where(false)
    }

    fn add_member(&mut self, member: &MemberDto) -> LibraryResult<MemberDto> {
        let entity = MemberEntity::new(member.name.as_str(), member.contact.as_str(), member.membership_id.as_str());
        self.member_repository.create(&entity)?;
        let added = MemberDto::from(&entity);
        self.publish(DomainEvent::added, "member_registered", "members", added.membership_id.as_str(), &added)?;
        info!(membership_id = added.membership_id.as_str(), "member registered");
        Ok(added)
    }

    fn remove_member(&mut self, membership_id: &str) -> LibraryResult<MemberDto> {
        let member = self.member_repository.get(membership_id)?;
        if member.has_open_loans() {
            warn!(membership_id, open_loans = member.loans.len(), "member removal rejected");
            return Err(LibraryError::has_open_loans(
                format!("cannot remove member '{}', they have unreturned books", member.name).as_str(),
                member.loans.len()));
        }
        let removed = MemberDto::from(&self.member_repository.delete(membership_id)?);
        self.publish(DomainEvent::deleted, "member_removed", "members", membership_id, &removed)?;
        info!(membership_id, "member removed");
        Ok(removed)
    }

    fn update_member(&mut self, membership_id: &str, name: Option<&str>, contact: Option<&str>) -> LibraryResult<MemberDto> {
        let mut member = self.member_repository.get(membership_id)?;
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            member.rename(name);
        }
        if let Some(contact) = contact.filter(|c| !c.is_empty()) {
            member.set_contact(contact);
        }
        self.member_repository.update(&member)?;
        let updated = MemberDto::from(&self.member_repository.get(membership_id)?);
        self.publish(DomainEvent::updated, "member_updated", "members", membership_id, &updated)?;
        info!(membership_id, "member updated");
        Ok(updated)
    }

    fn find_member_by_id(&self, membership_id: &str) -> Option<MemberDto> {
        self.member_repository.get(membership_id).ok().map(|m| MemberDto::from(&m))
    }

    fn list_members(&self) -> Vec<MemberDto> {
        self.member_repository.find_all().iter().map(MemberDto::from).collect()
    }

    fn borrow_book(&mut self, membership_id: &str, isbn: &str) -> LibraryResult<BorrowReceiptDto> {
        let now = self.clock.now();
        let mut member = self.member_repository.get(membership_id)?;
        let mut book = self.book_repository.get(isbn)?;
        if let Err(err) = book.take_copy() {
            warn!(membership_id, isbn, %err, "borrow rejected");
            return Err(err);
        }
        let loan = LoanEntity::new(&book, now, self.book_loan_days)?;
        member.add_loan(loan.clone());
        self.book_repository.update(&book)?;
        self.member_repository.update(&member)?;

        let receipt = BorrowReceiptDto {
            loan: LoanDto::from(&loan),
            membership_id: member.membership_id.to_string(),
            member_name: member.name.to_string(),
            copies_left: book.quantity,
        };
        self.publish(DomainEvent::borrowed, "book_borrowed", "lending", loan.loan_id.as_str(), &receipt)?;
        info!(membership_id, isbn, due_at = %loan.due_at, "book borrowed");
        Ok(receipt)
    }

    fn return_book(&mut self, membership_id: &str, isbn: &str) -> LibraryResult<ReturnReceiptDto> {
        let now = self.clock.now();
        let mut member = self.member_repository.get(membership_id)?;
        let mut book = self.book_repository.get(isbn)?;
        let loan = member.remove_loan_by_isbn(isbn).ok_or_else(|| LibraryError::not_borrowed(
            format!("member '{}' has not borrowed book {}", member.name, isbn).as_str()))?;
        book.put_back_copy()?;
        self.book_repository.update(&book)?;
        self.member_repository.update(&member)?;

        let days_overdue = if loan.is_overdue(now) {
            let days = loan.days_overdue(now);
            warn!(membership_id, isbn, days_overdue = days, "book returned late");
            Some(days)
        } else {
            None
        };
        let receipt = ReturnReceiptDto {
            loan: self.loan_dto(&loan),
            membership_id: member.membership_id.to_string(),
            member_name: member.name.to_string(),
            returned_at: now,
            days_overdue,
        };
        self.publish(DomainEvent::returned, "book_returned", "lending", loan.loan_id.as_str(), &receipt)?;
        info!(membership_id, isbn, "book returned");
        Ok(receipt)
    }

    fn list_overdue(&self) -> Vec<OverdueLoanDto> {
        let now = self.clock.now();
        let mut res = vec![];
        for member in self.member_repository.find_all() {
            for loan in member.loans.iter().filter(|l| l.is_overdue(now)) {
                res.push(OverdueLoanDto {
                    loan: self.loan_dto(loan),
                    membership_id: member.membership_id.to_string(),
                    member_name: member.name.to_string(),
                    member_contact: member.contact.to_string(),
                    days_overdue: loan.days_overdue(now),
                });
            }
        }
        debug!(overdue = res.len(), "listed overdue loans");
        res
    }

    fn member_history(&self, membership_id: &str) -> LibraryResult<Vec<LoanHistoryDto>> {
        let now = self.clock.now();
        let member = self.member_repository.get(membership_id)?;
        Ok(member.loans.iter().map(|loan| LoanHistoryDto {
            loan: self.loan_dto(loan),
            loan_status: loan.status(now),
            days_overdue: loan.days_overdue(now),
        }).collect())
    }

    fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        self.search(&SearchCriteria::title(title))
    }

    fn search_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        self.search(&SearchCriteria::author(author))
    }

    fn search_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>> {
        self.search(&SearchCriteria::genre(genre))
    }

    fn search_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        self.find_book_by_isbn(isbn)
    }

    fn advanced_search(&self, criteria: &SearchCriteria) -> LibraryResult<Vec<BookDto>> {
        self.search(criteria)
    }

    fn stats(&self) -> LibraryStatsDto {
        LibraryStatsDto {
            unique_titles: self.book_repository.count(),
            total_copies: self.book_repository.total_copies(),
            total_members: self.member_repository.count(),
            active_loans: self.member_repository.open_loans(),
        }
    }
}
