//! Directory-backed key-value store.
//!
//! Each key is stored as `<key>.json` inside a single directory opened
//! through `cap-std`, so the store cannot reach outside that directory.
//! Writes go to `<key>.json.tmp` first and are renamed into place, so an
//! interrupted write leaves the previous value readable. Filesystem calls
//! run on the blocking thread pool.

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::board::ports::{KeyValueStore, StorageError, StorageResult};

const ENTRY_EXTENSION: &str = "json";
const PENDING_EXTENSION: &str = "tmp";

/// Key-value store keeping one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: Arc<Dir>,
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let root = path.as_ref().to_path_buf();
        Dir::create_ambient_dir_all(&root, ambient_authority()).map_err(StorageError::backend)?;
        let dir =
            Dir::open_ambient_dir(&root, ambient_authority()).map_err(StorageError::backend)?;
        Ok(Self {
            dir: Arc::new(dir),
            root,
        })
    }

    /// Returns the directory this store writes to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn run_blocking<T, F>(&self, operation: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> io::Result<T> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || operation(&dir))
            .await
            .map_err(StorageError::backend)?
            .map_err(StorageError::backend)
    }
}

/// Maps a key onto a file name, rejecting anything that could escape the
/// store directory or collide with another key.
fn entry_name(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'));
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{ENTRY_EXTENSION}"))
}

fn pending_name(entry: &str) -> String {
    format!("{entry}.{PENDING_EXTENSION}")
}

/// Matches committed entries and leftovers of interrupted writes.
fn is_store_file(name: &Path) -> bool {
    match name.extension() {
        Some(ext) if ext == ENTRY_EXTENSION => true,
        Some(ext) if ext == PENDING_EXTENSION => name
            .file_stem()
            .map(Path::new)
            .and_then(Path::extension)
            .is_some_and(|inner| inner == ENTRY_EXTENSION),
        _ => false,
    }
}

fn write_replacing(dir: &Dir, name: &str, content: &[u8]) -> io::Result<()> {
    let pending = pending_name(name);
    let mut file = dir.create(&pending)?;
    file.write_all(content)?;
    file.sync_all()?;
    drop(file);
    dir.rename(&pending, dir, name)
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let name = entry_name(key)?;
        self.run_blocking(move |dir| match dir.read_to_string(&name) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let name = entry_name(key)?;
        let content = value.to_owned();
        self.run_blocking(move |dir| write_replacing(dir, &name, content.as_bytes()))
            .await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let name = entry_name(key)?;
        self.run_blocking(move |dir| match dir.remove_file(&name) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        })
        .await
    }

    async fn clear(&self) -> StorageResult<()> {
        self.run_blocking(|dir| {
            for entry in dir.entries()? {
                let name = PathBuf::from(entry?.file_name());
                if is_store_file(&name) {
                    dir.remove_file(&name)?;
                }
            }
            Ok(())
        })
        .await
    }
}
