use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult, LoanStatus};
use crate::utils::date::serializer;

// LoanEntity abstracts a copy out on loan. It keeps the book's isbn plus a
// title/author snapshot, the book itself stays owned by the catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct LoanEntity {
    pub loan_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(with = "serializer")]
    pub borrowed_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

impl LoanEntity {
    pub fn new(book: &BookEntity, borrowed_at: NaiveDateTime, loan_days: i64) -> LibraryResult<Self> {
        let due_at = Duration::try_days(loan_days)
            .and_then(|period| borrowed_at.checked_add_signed(period))
            .ok_or_else(|| LibraryError::invalid_value(
                format!("loan period of {} days is out of range", loan_days).as_str(),
                Some("loan_period".to_string())))?;
        Ok(Self {
            loan_id: Uuid::new_v4().to_string(),
            isbn: book.isbn.to_string(),
            title: book.title.to_string(),
            author: book.author.to_string(),
            borrowed_at,
            due_at,
        })
    }

    // a loan due exactly now is still on time
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        now > self.due_at
    }

    // whole days past the due date, zero while on time
    pub fn days_overdue(&self, now: NaiveDateTime) -> i64 {
        if self.is_overdue(now) {
            (now - self.due_at).num_days()
        } else {
            0
        }
    }

    pub fn status(&self, now: NaiveDateTime) -> LoanStatus {
        if self.is_overdue(now) {
            LoanStatus::Overdue
        } else {
            LoanStatus::OnTime
        }
    }
}
