use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::lending::domain::model::LoanEntity;
use crate::utils::memory::Versioned;

// MemberEntity abstracts a registered borrower and the loans they currently hold,
// in borrow order.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct MemberEntity {
    pub membership_id: String,
    pub version: i64,
    pub name: String,
    pub contact: String,
    pub loans: Vec<LoanEntity>,
}

impl MemberEntity {
    pub fn new(name: &str, contact: &str, membership_id: &str) -> Self {
        Self {
            membership_id: membership_id.to_string(),
            version: 0,
            name: name.to_string(),
            contact: contact.to_string(),
            loans: vec![],
        }
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_contact(&mut self, contact: &str) {
        self.contact = contact.to_string();
    }

    pub fn add_loan(&mut self, loan: LoanEntity) {
        self.loans.push(loan);
    }

    pub fn find_loan(&self, isbn: &str) -> Option<&LoanEntity> {
        self.loans.iter().find(|l| l.isbn == isbn)
    }

    // removes the first loan of the given isbn
    pub fn remove_loan_by_isbn(&mut self, isbn: &str) -> Option<LoanEntity> {
        let pos = self.loans.iter().position(|l| l.isbn == isbn)?;
        Some(self.loans.remove(pos))
    }

    pub fn has_open_loans(&self) -> bool {
        !self.loans.is_empty()
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.membership_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Versioned for MemberEntity {
    fn bump_version(&mut self) {
        self.version += 1;
    }
}
