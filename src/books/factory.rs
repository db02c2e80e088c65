use crate::books::repository::BookRepository;
use crate::books::repository::mem_book_repository::MemBookRepository;

pub(crate) fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemBookRepository::new())
}
