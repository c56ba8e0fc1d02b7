use std::{io::ErrorKind, marker::PhantomData, path::{Path, PathBuf}, sync::Arc};
use tokio::{fs, sync::Mutex};
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Generic JSON file-backed ordered list store.
///
/// Nothing is cached: every read loads the whole file and every mutation
/// rewrites it. Writes land in a temporary sibling file that is then renamed
/// over the target, so a reader sees either the old or the new collection.
/// Mutations within one process are serialized by `write_lock`.
pub struct JsonListStore<T> {
    file_path: PathBuf,
    write_lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Send,
{
    /// Initialize the store from a path. Creates the file with an empty array
    /// if missing; an existing file must already hold a JSON array.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let store = Self { file_path, write_lock: Mutex::new(()), _marker: PhantomData };
        match fs::read(&store.file_path).await {
            Ok(bytes) => {
                let items: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| {
                    ServiceError::Storage(format!("{} is not a JSON array of records: {e}", store.file_path.display()))
                })?;
                debug!(path = %store.file_path.display(), count = items.len(), "loaded existing collection");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                store.save(&[]).await?;
                debug!(path = %store.file_path.display(), "initialized empty collection");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Arc::new(store))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole collection. A file removed after startup reads as empty.
    pub async fn load(&self) -> Result<Vec<T>, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(items)?;
        let file_name = self
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".into());
        let tmp_path = self.file_path.with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        fs::write(&tmp_path, data).await?;
        if let Err(e) = fs::rename(&tmp_path, &self.file_path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        debug!(path = %self.file_path.display(), count = items.len(), "collection persisted");
        Ok(())
    }

    /// Load, apply `f`, and persist the result as one exclusive step.
    /// Nothing is written when `f` fails.
    pub async fn mutate<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ServiceError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;
        let out = f(&mut items)?;
        self.save(&items).await?;
        Ok(out)
    }
}
