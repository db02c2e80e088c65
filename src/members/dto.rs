use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::lending::dto::LoanDto;
use crate::members::domain::model::MemberEntity;

// MemberDto abstracts a library member and their open loans.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub membership_id: String,
    pub version: i64,
    pub name: String,
    pub contact: String,
    pub loans: Vec<LoanDto>,
}

impl MemberDto {
    pub fn new(name: &str, contact: &str, membership_id: &str) -> Self {
        Self {
            membership_id: membership_id.to_string(),
            version: 0,
            name: name.to_string(),
            contact: contact.to_string(),
            loans: vec![],
        }
    }

    pub fn open_loans(&self) -> usize {
        self.loans.len()
    }
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.membership_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            membership_id: other.membership_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            contact: other.contact.to_string(),
            loans: other.loans.iter().map(LoanDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::books::domain::model::BookEntity;
    use crate::lending::domain::model::LoanEntity;
    use crate::members::domain::model::MemberEntity;
    use crate::members::dto::MemberDto;

    #[test]
    fn test_should_build_member() {
        let member = MemberDto::new("Ada", "ada@example.org", "M1");
        assert_eq!("ada@example.org", member.contact.as_str());
        assert_eq!(0, member.open_loans());
    }

    #[test]
    fn test_should_copy_loans_from_entity() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let mut entity = MemberEntity::new("Ada", "ada@example.org", "M1");
        entity.add_loan(LoanEntity::new(&BookEntity::new("Dune", "Frank Herbert", "111", "Sci-Fi", 1), at, 14).expect("valid loan"));
        let member = MemberDto::from(&entity);
        assert_eq!(1, member.open_loans());
        assert_eq!("111", member.loans[0].isbn.as_str());
    }
}
