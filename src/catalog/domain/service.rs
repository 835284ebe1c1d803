use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{LoadStatus, Repository};

pub(crate) struct CatalogServiceImpl {
    books: Vec<BookEntity>,
    book_repository: Box<dyn Repository<BookEntity>>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn Repository<BookEntity>>) -> Self {
        Self {
            books: vec![],
            book_repository,
        }
    }

    fn find_first(&mut self, isbn: &str, available: bool) -> Option<&mut BookEntity> {
        self.books.iter_mut().find(|b| b.isbn() == isbn && b.is_available() == available)
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> LibraryResult<BookEntity> {
        let book = BookEntity::new(title, author, isbn);
        self.books.push(book.clone());
        info!("added book {}", isbn);
        Ok(book)
    }

    async fn remove_book(&mut self, isbn: &str) -> LibraryResult<usize> {
        let before = self.books.len();
        self.books.retain(|b| b.isbn() != isbn);
        let removed = before - self.books.len();
        info!("removed {} copies of {}", removed, isbn);
        Ok(removed)
    }

    async fn view_all_books(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.clone())
    }

    async fn borrow_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        match self.find_first(isbn, true) {
            Some(book) => {
                book.available = false;
                info!("borrowed book {}", isbn);
                Ok(book.clone())
            }
            None => Err(LibraryError::state_conflict("Book not available.")),
        }
    }

    async fn return_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        match self.find_first(isbn, false) {
            Some(book) => {
                book.available = true;
                info!("returned book {}", isbn);
                Ok(book.clone())
            }
            None => Err(LibraryError::state_conflict("Invalid return.")),
        }
    }

    async fn buy_book(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        match self.books.iter().position(|b| b.isbn() == isbn) {
            Some(ndx) => {
                let book = self.books.remove(ndx);
                info!("sold book {}", isbn);
                Ok(book)
            }
            None => Err(LibraryError::not_found("Book not found.")),
        }
    }

    async fn load(&mut self) -> LoadStatus {
        let res = self.book_repository.load().await;
        let status = LoadStatus::from_result(res, &mut self.books);
        debug!("catalog load {:?}", status);
        status
    }

    async fn save(&self) -> LibraryResult<usize> {
        self.book_repository.save(&self.books).await
    }
}
