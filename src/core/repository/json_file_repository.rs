use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonFileRepository keeps the full collection as a pretty printed json array in a single file.
#[derive(Debug)]
pub struct JsonFileRepository<Entity> {
    path: PathBuf,
    _entity: PhantomData<fn() -> Entity>,
}

impl<Entity> JsonFileRepository<Entity> {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<Entity> Repository<Entity> for JsonFileRepository<Entity>
    where Entity: Serialize + DeserializeOwned + Sync + Send + 'static {
    async fn load(&self) -> LibraryResult<Option<Vec<Entity>>> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no saved data at {}", self.path.display());
                return Ok(None);
            }
            Err(err) => {
                warn!("failed to read {}: {}", self.path.display(), err);
                return Err(LibraryError::from(err));
            }
        };
        let entities: Vec<Entity> = serde_json::from_slice(&data).map_err(|err| {
            warn!("failed to parse {}: {}", self.path.display(), err);
            LibraryError::from(err)
        })?;
        debug!("loaded {} records from {}", entities.len(), self.path.display());
        Ok(Some(entities))
    }

    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let data = serde_json::to_vec_pretty(entities)?;
        tokio::fs::write(&self.path, data).await?;
        debug!("saved {} records to {}", entities.len(), self.path.display());
        Ok(entities.len())
    }
}
