pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::LoadStatus;

// CatalogService owns the ordered list of books. Wherever several copies share an isbn,
// the first one in catalog order is picked.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookEntity>;
    // removes every copy with the isbn, succeeds even when nothing matched
    async fn remove_book(&mut self, isbn: &str) -> LibraryResult<usize>;
    async fn view_all_books(&self) -> LibraryResult<Vec<BookEntity>>;
    async fn borrow_book(&mut self, isbn: &str) -> LibraryResult<BookEntity>;
    async fn return_book(&mut self, isbn: &str) -> LibraryResult<BookEntity>;
    async fn buy_book(&mut self, isbn: &str) -> LibraryResult<BookEntity>;
    async fn load(&mut self) -> LoadStatus;
    async fn save(&self) -> LibraryResult<usize>;
}
