use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryRepository keeps the saved collection in process, used for local runs and tests.
#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    saved: Mutex<Option<Vec<Entity>>>,
}

impl<Entity> MemoryRepository<Entity> {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(None),
        }
    }

    pub fn with(entities: Vec<Entity>) -> Self {
        Self {
            saved: Mutex::new(Some(entities)),
        }
    }
}

impl<Entity> Default for MemoryRepository<Entity> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<Entity> Repository<Entity> for MemoryRepository<Entity>
    where Entity: Clone + Sync + Send + 'static {
    async fn load(&self) -> LibraryResult<Option<Vec<Entity>>> {
        let saved = self.saved.lock()
            .map_err(|err| LibraryError::runtime(format!("poisoned store {:?}", err).as_str(), None))?;
        Ok(saved.clone())
    }

    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize> {
        let mut saved = self.saved.lock()
            .map_err(|err| LibraryError::runtime(format!("poisoned store {:?}", err).as_str(), None))?;
        *saved = Some(entities.to_vec());
        Ok(entities.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::memory_repository::MemoryRepository;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_load_none_before_save() {
        let repo: MemoryRepository<String> = MemoryRepository::new();
        assert!(repo.load().await.expect("should load").is_none());
    }

    #[tokio::test]
    async fn test_should_replace_on_save() {
        let repo = MemoryRepository::with(vec!["a".to_string()]);
        let _ = repo.save(&["b".to_string(), "c".to_string()]).await.expect("should save");
        let loaded = repo.load().await.expect("should load").expect("should have entities");
        assert_eq!(vec!["b".to_string(), "c".to_string()], loaded);
    }
}
