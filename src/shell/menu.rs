use std::io;
use std::io::{BufRead, ErrorKind, Write};
use tracing::{debug, info};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{BookListing, ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBy};
use crate::catalog::command::stats_cmd::{StatsCommand, StatsCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::SearchCriteria;
use crate::core::command::{Command, CommandError};
use crate::lending::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::lending::command::overdue_report_cmd::{OverdueReportCommand, OverdueReportCommandRequest};
use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
use crate::members::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest};
use crate::members::command::member_history_cmd::{MemberHistoryCommand, MemberHistoryCommandRequest};
use crate::members::command::remove_member_cmd::{RemoveMemberCommand, RemoveMemberCommandRequest};
use crate::members::command::update_member_cmd::{UpdateMemberCommand, UpdateMemberCommandRequest};
use crate::shell::prompt::Prompter;
use crate::shell::render;

const MAIN_MENU: [&str; 6] = ["Book Management", "Member Management", "Borrow/Return Books",
    "Search Books", "Reports & Statistics", "Exit"];
const BOOK_MENU: [&str; 7] = ["Add New Book", "Update Book Details", "Remove Book", "Display All Books",
    "Display Available Books", "Display Unavailable Books", "Back to Main Menu"];
const MEMBER_MENU: [&str; 6] = ["Register New Member", "Update Member Details", "Remove Member",
    "Display All Members", "Display Member History", "Back to Main Menu"];
const LENDING_MENU: [&str; 4] = ["Borrow a Book", "Return a Book", "Check Overdue Books", "Back to Main Menu"];
const SEARCH_MENU: [&str; 6] = ["Search by Title", "Search by Author", "Search by Genre", "Search by ISBN",
    "Advanced Search (Multiple Criteria)", "Back to Main Menu"];
const REPORTS_MENU: [&str; 5] = ["Library Statistics", "Overdue Books Report", "Available Books",
    "Unavailable Books", "Back to Main Menu"];

// Shell is the text front desk: it turns menu choices into commands and
// prints their outcome.
pub struct Shell<R, W> {
    catalog: Box<dyn CatalogService>,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                info!("input closed, leaving the front desk");
                self.prompt.say("\nGoodbye!")
            }
            other => other,
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    fn choose(&mut self, title: &str, options: &[&str]) -> io::Result<String> {
        self.prompt.say(render::menu(title, options).as_str())?;
        let choice = self.prompt.required(format!("\nEnter your choice (1-{}): ", options.len()).as_str())?;
        debug!(menu = title, choice = choice.as_str(), "menu choice");
        Ok(choice)
    }

    fn invalid(&mut self, options: &[&str]) -> io::Result<()> {
        self.prompt.say(format!("Invalid choice. Please enter 1-{}.", options.len()).as_str())
    }

    fn report<T>(&mut self, res: Result<T, CommandError>, ok: impl FnOnce(T) -> String) -> io::Result<()> {
        match res {
            Ok(res) => self.prompt.say(ok(res).as_str()),
            Err(err) => self.prompt.say(render::error(&err).as_str()),
        }
    }

    fn main_menu(&mut self) -> io::Result<()> {
        self.prompt.say(render::heading("LIBRARY CIRCULATION DESK").as_str())?;
        loop {
            match self.choose("MAIN MENU", &MAIN_MENU)?.as_str() {
                "1" => self.book_menu()?,
                "2" => self.member_menu()?,
                "3" => self.lending_menu()?,
                "4" => self.search_menu()?,
                "5" => self.reports_menu()?,
                "6" => {
                    info!("leaving the front desk");
                    return self.prompt.say("Goodbye!");
                }
                _ => self.invalid(&MAIN_MENU)?,
            }
        }
    }

    fn book_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("BOOK MANAGEMENT", &BOOK_MENU)?.as_str() {
                "1" => self.add_book()?,
                "2" => self.update_book()?,
                "3" => {
                    let isbn = self.prompt.required("Enter ISBN of book to remove: ")?;
                    let res = RemoveBookCommand::new(self.catalog.as_mut()).execute(RemoveBookCommandRequest::new(isbn.as_str()));
                    self.report(res, |res| format!("Book '{}' removed successfully!", res.book.title))?;
                }
                "4" => self.list_books(BookListing::All)?,
                "5" => self.list_books(BookListing::Available)?,
                "6" => self.list_books(BookListing::Unavailable)?,
                "7" => return Ok(()),
                _ => self.invalid(&BOOK_MENU)?,
            }
        }
    }

    fn add_book(&mut self) -> io::Result<()> {
        self.prompt.say("\n--- Add New Book ---")?;
        let title = self.prompt.required("Enter book title: ")?;
        let author = self.prompt.required("Enter author name: ")?;
        let isbn = self.prompt.required("Enter ISBN: ")?;
        let genre = self.prompt.required("Enter genre: ")?;
        let quantity = self.prompt.number("Enter quantity: ")?;
        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str(), genre.as_str(), quantity);
        let res = AddBookCommand::new(self.catalog.as_mut()).execute(req);
        self.report(res, |res| format!("Book '{}' added successfully!", res.book.title))
    }

    fn update_book(&mut self) -> io::Result<()> {
        self.prompt.say("\n--- Update Book Details ---")?;
        let isbn = self.prompt.required("Enter ISBN of book to update: ")?;
        let current = GetBookCommand::new(self.catalog.as_ref()).execute(GetBookCommandRequest::new(isbn.as_str()));
        let current = match current {
            Ok(res) => res.book,
            Err(err) => return self.prompt.say(render::error(&err).as_str()),
        };
        self.prompt.say(format!("\nCurrent details: {}", render::book_line(&current)).as_str())?;
        self.prompt.say("\nEnter new details (press Enter to skip):")?;
        let mut req = UpdateBookCommandRequest::new(isbn.as_str());
        req.title = self.prompt.optional("New title: ")?;
        req.author = self.prompt.optional("New author: ")?;
        req.genre = self.prompt.optional("New genre: ")?;
        req.quantity = self.prompt.optional_number("New quantity: ")?;
        let res = UpdateBookCommand::new(self.catalog.as_mut()).execute(req);
        self.report(res, |res| {
            let mut lines = vec![];
            if let Some(err) = res.quantity_error {
                lines.push(format!("Error: {}", err));
            }
            lines.push(format!("Book with ISBN {} updated successfully!", res.book.isbn));
            lines.join("\n")
        })
    }

    fn list_books(&mut self, listing: BookListing) -> io::Result<()> {
        let (title, empty) = match listing {
            BookListing::All => ("ALL BOOKS IN LIBRARY", "No books in the library yet."),
            BookListing::Available => ("AVAILABLE BOOKS", "No books currently available for borrowing."),
            BookListing::Unavailable => ("UNAVAILABLE BOOKS", "All books are currently available."),
        };
        let res = ListBooksCommand::new(self.catalog.as_ref()).execute(ListBooksCommandRequest::new(listing));
        self.report(res, |res| render::book_list(title, &res.books, empty))
    }

    fn member_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("MEMBER MANAGEMENT", &MEMBER_MENU)?.as_str() {
                "1" => {
                    self.prompt.say("\n--- Register New Member ---")?;
                    let name = self.prompt.required("Enter member name: ")?;
                    let contact = self.prompt.required("Enter contact (email/phone): ")?;
                    let membership_id = self.prompt.required("Enter membership ID: ")?;
                    let req = AddMemberCommandRequest::new(name.as_str(), contact.as_str(), membership_id.as_str());
                    let res = AddMemberCommand::new(self.catalog.as_mut()).execute(req);
                    self.report(res, |res| format!("Member '{}' registered successfully!", res.member.name))?;
                }
                "2" => self.update_member()?,
                "3" => {
                    let membership_id = self.prompt.required("Enter membership ID: ")?;
                    let res = RemoveMemberCommand::new(self.catalog.as_mut())
                        .execute(RemoveMemberCommandRequest::new(membership_id.as_str()));
                    self.report(res, |res| format!("Member '{}' removed successfully!", res.member.name))?;
                }
                "4" => {
                    let res = ListMembersCommand::new(self.catalog.as_ref()).execute(ListMembersCommandRequest::default());
                    self.report(res, |res| render::member_list(&res.members))?;
                }
                "5" => {
                    let membership_id = self.prompt.required("Enter membership ID: ")?;
                    let res = MemberHistoryCommand::new(self.catalog.as_ref())
                        .execute(MemberHistoryCommandRequest::new(membership_id.as_str()));
                    self.report(res, |res| render::history(&res.member, &res.history))?;
                }
                "6" => return Ok(()),
                _ => self.invalid(&MEMBER_MENU)?,
            }
        }
    }

    fn update_member(&mut self) -> io::Result<()> {
        self.prompt.say("\n--- Update Member Details ---")?;
        let membership_id = self.prompt.required("Enter membership ID: ")?;
        let current = match self.catalog.find_member_by_id(membership_id.as_str()) {
            Some(member) => member,
            None => return self.prompt.say(format!("Error: member {} not found", membership_id).as_str()),
        };
        self.prompt.say(format!("\nCurrent details: {}", render::member_line(&current)).as_str())?;
        self.prompt.say("\nEnter new details (press Enter to skip):")?;
        let name = self.prompt.optional("New name: ")?;
        let contact = self.prompt.optional("New contact: ")?;
        let req = UpdateMemberCommandRequest::new(membership_id.as_str(), name.as_deref(), contact.as_deref());
        let res = UpdateMemberCommand::new(self.catalog.as_mut()).execute(req);
        self.report(res, |res| format!("Member with ID {} updated successfully!", res.member.membership_id))
    }

    fn lending_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("BORROW/RETURN BOOKS", &LENDING_MENU)?.as_str() {
                "1" => {
                    let membership_id = self.prompt.required("Enter membership ID: ")?;
                    let isbn = self.prompt.required("Enter ISBN of book to borrow: ")?;
                    let res = BorrowBookCommand::new(self.catalog.as_mut())
                        .execute(BorrowBookCommandRequest::new(membership_id.as_str(), isbn.as_str()));
                    self.report(res, |res| render::borrow_receipt(&res.receipt))?;
                }
                "2" => {
                    let membership_id = self.prompt.required("Enter membership ID: ")?;
                    let isbn = self.prompt.required("Enter ISBN of book to return: ")?;
                    let res = ReturnBookCommand::new(self.catalog.as_mut())
                        .execute(ReturnBookCommandRequest::new(membership_id.as_str(), isbn.as_str()));
                    self.report(res, |res| render::return_receipt(&res.receipt))?;
                }
                "3" => self.overdue_report()?,
                "4" => return Ok(()),
                _ => self.invalid(&LENDING_MENU)?,
            }
        }
    }

    fn overdue_report(&mut self) -> io::Result<()> {
        let res = OverdueReportCommand::new(self.catalog.as_ref()).execute(OverdueReportCommandRequest::default());
        self.report(res, |res| render::overdue_report(&res.overdue))
    }

    fn search(&mut self, search_by: SearchBy, label: String) -> io::Result<()> {
        let res = SearchBooksCommand::new(self.catalog.as_ref()).execute(SearchBooksCommandRequest::new(search_by));
        self.report(res, |res| render::search_results(label.as_str(), &res))
    }

    fn search_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("SEARCH BOOKS", &SEARCH_MENU)?.as_str() {
                "1" => {
                    let term = self.prompt.required("\nEnter title to search: ")?;
                    self.search(SearchBy::Title(term.to_string()), format!("title '{}'", term))?;
                }
                "2" => {
                    let term = self.prompt.required("\nEnter author name to search: ")?;
                    self.search(SearchBy::Author(term.to_string()), format!("author '{}'", term))?;
                }
                "3" => {
                    let term = self.prompt.required("\nEnter genre to search: ")?;
                    self.search(SearchBy::Genre(term.to_string()), format!("genre '{}'", term))?;
                }
                "4" => {
                    let isbn = self.prompt.required("\nEnter ISBN to search: ")?;
                    let res = GetBookCommand::new(self.catalog.as_ref()).execute(GetBookCommandRequest::new(isbn.as_str()));
                    match res {
                        Ok(res) => self.prompt.say(format!("Book found:\n1. {}", render::book_line(&res.book)).as_str())?,
                        Err(_) => self.prompt.say(format!("No book found with ISBN '{}'", isbn).as_str())?,
                    }
                }
                "5" => self.advanced_search()?,
                "6" => return Ok(()),
                _ => self.invalid(&SEARCH_MENU)?,
            }
        }
    }

    // an advanced search without criteria never reaches the catalog
    fn advanced_search(&mut self) -> io::Result<()> {
        self.prompt.say("\n--- Advanced Search ---\nEnter search criteria (press Enter to skip):")?;
        let criteria = SearchCriteria {
            title: self.prompt.optional("Title: ")?,
            author: self.prompt.optional("Author: ")?,
            genre: self.prompt.optional("Genre: ")?,
        };
        if criteria.is_empty() {
            return self.prompt.say("Please provide at least one search criterion.");
        }
        let label = [("title", criteria.title.as_deref()), ("author", criteria.author.as_deref()),
            ("genre", criteria.genre.as_deref())].into_iter()
            .filter_map(|(field, term)| term.map(|term| format!("{}='{}'", field, term)))
            .collect::<Vec<String>>()
            .join(", ");
        self.search(SearchBy::Advanced(criteria), format!("criteria ({})", label))
    }

    fn reports_menu(&mut self) -> io::Result<()> {
        loop {
            match self.choose("REPORTS & STATISTICS", &REPORTS_MENU)?.as_str() {
                "1" => {
                    let res = StatsCommand::new(self.catalog.as_ref()).execute(StatsCommandRequest::default());
                    self.report(res, |res| render::stats(&res.stats))?;
                }
                "2" => self.overdue_report()?,
                "3" => self.list_books(BookListing::Available)?,
                "4" => self.list_books(BookListing::Unavailable)?,
                "5" => return Ok(()),
                _ => self.invalid(&REPORTS_MENU)?,
            }
        }
    }
}
