use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::command::search_books_cmd::SearchBooksCommandResponse;
use crate::catalog::dto::LibraryStatsDto;
use crate::core::command::CommandError;
use crate::lending::dto::{BorrowReceiptDto, LoanHistoryDto, OverdueLoanDto, ReturnReceiptDto};
use crate::members::dto::MemberDto;
use crate::utils::date::{format_day, format_timestamp};

const WIDTH: usize = 80;

pub fn rule() -> String {
    "=".repeat(WIDTH)
}

pub fn heading(title: &str) -> String {
    format!("\n{}\n{}\n{}", rule(), title, rule())
}

pub fn menu(title: &str, options: &[&str]) -> String {
    let mut lines = vec![heading(title)];
    lines.extend(options.iter().enumerate().map(|(i, option)| format!("{}. {}", i + 1, option)));
    lines.push(rule());
    lines.join("\n")
}

pub fn error(err: &CommandError) -> String {
    format!("Error: {}", err)
}

pub fn book_line(book: &BookDto) -> String {
    format!("[ISBN: {}] {} by {} | Genre: {} | Quantity: {} | Status: {}",
            book.isbn, book.title, book.author, book.genre, book.quantity, book.status())
}

pub fn member_line(member: &MemberDto) -> String {
    format!("[ID: {}] {} | Contact: {} | Borrowed Books: {}",
            member.membership_id, member.name, member.contact, member.open_loans())
}

fn numbered<T>(items: &[T], line: fn(&T) -> String) -> Vec<String> {
    items.iter().enumerate().map(|(i, item)| format!("{}. {}", i + 1, line(item))).collect()
}

pub fn book_list(title: &str, books: &[BookDto], empty: &str) -> String {
    if books.is_empty() {
        return empty.to_string();
    }
    let mut lines = vec![heading(title)];
    lines.extend(numbered(books, book_line));
    lines.push(rule());
    lines.join("\n")
}

pub fn member_list(members: &[MemberDto]) -> String {
    if members.is_empty() {
        return "No members registered yet.".to_string();
    }
    let mut lines = vec![heading("ALL REGISTERED MEMBERS")];
    lines.extend(numbered(members, member_line));
    lines.push(rule());
    lines.join("\n")
}

pub fn search_results(label: &str, res: &SearchBooksCommandResponse) -> String {
    if res.books.is_empty() {
        return format!("No books found matching {}", label);
    }
    let total = res.books.len();
    let mut lines = vec![format!("Found {} book(s) matching {}:", total, label)];
    lines.extend(numbered(&res.books, book_line));
    lines.push("Availability Summary:".to_string());
    lines.push(format!("   Available: {}/{}", res.available, total));
    lines.push(format!("   Unavailable: {}/{}", res.unavailable, total));
    lines.join("\n")
}

pub fn borrow_receipt(receipt: &BorrowReceiptDto) -> String {
    let loan_days = (receipt.loan.due_at - receipt.loan.borrowed_at).num_days();
    [
        format!("Book '{}' borrowed successfully by {}!", receipt.loan.title, receipt.member_name),
        format!("   Borrow Date: {}", format_timestamp(receipt.loan.borrowed_at)),
        format!("   Due Date: {}", format_timestamp(receipt.loan.due_at)),
        format!("   Please return within {} days!", loan_days),
    ].join("\n")
}

pub fn return_receipt(receipt: &ReturnReceiptDto) -> String {
    let mut lines = vec![];
    if let Some(days) = receipt.days_overdue {
        lines.push(format!("Warning: Book is {} day(s) overdue!", days));
    }
    lines.push(format!("Book '{}' returned successfully by {}!", receipt.loan.title, receipt.member_name));
    lines.push(format!("   Return Date: {}", format_timestamp(receipt.returned_at)));
    lines.join("\n")
}

pub fn overdue_report(overdue: &[OverdueLoanDto]) -> String {
    let mut lines = vec![heading("OVERDUE BOOKS REPORT")];
    if overdue.is_empty() {
        lines.push("No overdue books! All members are on time.".to_string());
    }
    for o in overdue {
        lines.push(format!("\nBook: {} (ISBN: {})", o.loan.title, o.loan.isbn));
        lines.push(format!("   Member: {} (ID: {})", o.member_name, o.membership_id));
        lines.push(format!("   Borrow Date: {}", format_day(o.loan.borrowed_at)));
        lines.push(format!("   Due Date: {}", format_day(o.loan.due_at)));
        lines.push(format!("   Days Overdue: {} day(s)", o.days_overdue));
        lines.push(format!("   Contact: {}", o.member_contact));
    }
    lines.push(rule());
    lines.join("\n")
}

pub fn history(member: &MemberDto, history: &[LoanHistoryDto]) -> String {
    let mut lines = vec![heading(format!("BORROWING HISTORY - {} (ID: {})", member.name, member.membership_id).as_str())];
    if history.is_empty() {
        lines.push("No books currently borrowed.".to_string());
    }
    for (i, h) in history.iter().enumerate() {
        let status = if h.days_overdue > 0 {
            format!("{} ({} day(s))", h.loan_status, h.days_overdue)
        } else {
            h.loan_status.to_string()
        };
        lines.push(format!("\n{}. {} by {}", i + 1, h.loan.title, h.loan.author));
        lines.push(format!("   ISBN: {}", h.loan.isbn));
        lines.push(format!("   Borrowed: {}", format_timestamp(h.loan.borrowed_at)));
        lines.push(format!("   Due: {}", format_timestamp(h.loan.due_at)));
        lines.push(format!("   Status: {}", status));
    }
    lines.push(rule());
    lines.join("\n")
}

pub fn stats(stats: &LibraryStatsDto) -> String {
    [
        heading("LIBRARY STATISTICS"),
        format!("Total Books (Unique): {}", stats.unique_titles),
        format!("Total Copies: {}", stats.total_copies),
        format!("Total Registered Members: {}", stats.total_members),
        format!("Books Currently On Loan: {}", stats.active_loans),
        rule(),
    ].join("\n")
}
