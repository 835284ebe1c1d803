use crate::accounts::domain::DirectoryService;
use crate::accounts::domain::model::AccountEntity;
use crate::accounts::domain::service::DirectoryServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::json_file_repository::JsonFileRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::core::repository::{Repository, RepositoryStore};

pub async fn create_account_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn Repository<AccountEntity>> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(JsonFileRepository::new(config.users_path().as_path()))
        }
        RepositoryStore::InMemory => {
            Box::new(MemoryRepository::new())
        }
    }
}

pub async fn create_directory_service(config: &Configuration, store: RepositoryStore) -> Box<dyn DirectoryService> {
    let account_repo = create_account_repository(config, store).await;
    Box::new(DirectoryServiceImpl::new(account_repo))
}
