use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::library::LibraryError;

// BookChanges carries a partial update, None leaves the field as it is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub quantity: Option<i64>,
}

// BookUpdateDto is the outcome of a partial update. A rejected quantity does not
// undo the textual changes applied in the same call.
#[derive(Debug, Clone, PartialEq)]
pub struct BookUpdateDto {
    pub book: BookDto,
    pub quantity_error: Option<LibraryError>,
}

// SearchCriteria combines title, author and genre filters with AND.
// With no criteria at all it selects the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn title(term: &str) -> Self {
        Self { title: Some(term.to_string()), ..Default::default() }
    }

    pub fn author(term: &str) -> Self {
        Self { author: Some(term.to_string()), ..Default::default() }
    }

    pub fn genre(term: &str) -> Self {
        Self { genre: Some(term.to_string()), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.to_predicate().is_empty()
    }

    pub(crate) fn to_predicate(&self) -> HashMap<String, String> {
        let mut predicate = HashMap::new();
        for (field, term) in [("title", &self.title), ("author", &self.author), ("genre", &self.genre)] {
            if let Some(term) = term.as_ref().filter(|t| !t.is_empty()) {
                predicate.insert(field.to_string(), term.to_string());
            }
        }
        predicate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LibraryStatsDto {
    pub unique_titles: usize,
    pub total_copies: i128,
    pub total_members: usize,
    pub active_loans: usize,
}
