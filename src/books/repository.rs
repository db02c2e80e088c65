pub mod mem_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub(crate) trait BookRepository: Repository<BookEntity> {
    // summed in i128 so a catalog of maximal quantities cannot overflow
    fn total_copies(&self) -> i128;
}
