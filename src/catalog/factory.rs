use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::json_file_repository::JsonFileRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::core::repository::{Repository, RepositoryStore};

pub async fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn Repository<BookEntity>> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonFileRepository::new(config.books_path().as_path()))
        }
        RepositoryStore::InMemory => {
            Box::new(MemoryRepository::new())
        }
    }
}

pub async fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> Box<dyn CatalogService> {
    let book_repo = create_book_repository(config, store).await;
    Box::new(CatalogServiceImpl::new(book_repo))
}
