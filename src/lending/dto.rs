use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::library::LoanStatus;
use crate::lending::domain::model::LoanEntity;
use crate::utils::date::serializer;

// LoanDto describes an open loan, title and author reflect the catalog at query time
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(with = "serializer")]
    pub borrowed_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> Self {
        Self {
            loan_id: other.loan_id.to_string(),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            borrowed_at: other.borrowed_at,
            due_at: other.due_at,
        }
    }
}

// LoanHistoryDto is one line of a member's borrowing history
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanHistoryDto {
    pub loan: LoanDto,
    pub loan_status: LoanStatus,
    pub days_overdue: i64,
}

// OverdueLoanDto is one line of the overdue report
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OverdueLoanDto {
    pub loan: LoanDto,
    pub membership_id: String,
    pub member_name: String,
    pub member_contact: String,
    pub days_overdue: i64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BorrowReceiptDto {
    pub loan: LoanDto,
    pub membership_id: String,
    pub member_name: String,
    pub copies_left: i64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReturnReceiptDto {
    pub loan: LoanDto,
    pub membership_id: String,
    pub member_name: String,
    #[serde(with = "serializer")]
    pub returned_at: NaiveDateTime,
    // set when the copy came back after its due date
    pub days_overdue: Option<i64>,
}
