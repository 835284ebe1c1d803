pub mod json_file_repository;
pub mod memory_repository;

use async_trait::async_trait;
use crate::core::library::{LibraryError, LibraryResult};

// Repository persists a whole ordered collection at once, there is no per-entity update.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads previously saved entities, None if nothing was ever saved
    async fn load(&self) -> LibraryResult<Option<Vec<Entity>>>;

    // overwrites saved entities and returns number of entities written
    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}

// Outcome of loading a collection at startup. Neither Missing nor Corrupt stop the
// application, both leave the collection empty.
#[derive(Debug)]
pub enum LoadStatus {
    Loaded(usize),
    Missing,
    Corrupt(LibraryError),
}

impl LoadStatus {
    pub fn from_result<Entity>(res: LibraryResult<Option<Vec<Entity>>>, into: &mut Vec<Entity>) -> Self {
        match res {
            Ok(Some(entities)) => {
                let size = entities.len();
                *into = entities;
                LoadStatus::Loaded(size)
            }
            Ok(None) => LoadStatus::Missing,
            Err(err) => {
                into.clear();
                LoadStatus::Corrupt(err)
            }
        }
    }
}
