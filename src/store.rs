use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::ids::{self, ID_LEN};
use crate::models::{Item, TodoFile};

/// Borrowed view of the list used when writing the file
#[derive(Serialize)]
struct TodoFileRef<'a> {
    todos: &'a [Item],
}

struct Inner {
    todos: Vec<Item>,
    file: Option<File>,
}

impl Inner {
    fn find(&self, id: &str) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = ids::random_string(ID_LEN);
            if self.todos.iter().all(|todo| todo.id != id) {
                return id;
            }
        }
    }

    /// Write `todos` to the file, then make it the current list
    ///
    /// The in-memory list is only replaced once the file holds the new
    /// contents, so a failed write leaves both untouched.
    async fn commit(&mut self, todos: Vec<Item>) -> Result<(), StoreError> {
        let mut bytes = serde_json::to_vec(&TodoFileRef { todos: &todos })?;
        bytes.push(b'\n');

        let mut file = self.file.take().ok_or(StoreError::Closed)?;
        let (file, written) = tokio::task::spawn_blocking(move || {
            let written = overwrite(&mut file, &bytes);
            (file, written)
        })
        .await
        .map_err(|e| StoreError::Io(std::io::Error::other(e)))?;
        self.file = Some(file);

        written?;
        self.todos = todos;
        Ok(())
    }
}

/// Truncate `file` and replace its contents with `bytes`
fn overwrite(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(bytes)?;
    file.flush()
}

/// File-backed, ordered list of todos
///
/// The list lives in memory and the whole of it is rewritten to the backing
/// file after every mutation. All access goes through one async mutex, so a
/// mutation and its write to disk are never interleaved with another request.
pub struct TodoStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl TodoStore {
    /// Open the store at `path`, creating the file and its directory if needed
    ///
    /// An empty file is an empty list.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be created or read, or
    /// if the file does not hold a valid todo list
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let todos = if contents.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str::<TodoFile>(&contents)?.todos
        };

        tracing::info!("Loaded {} todos from {}", todos.len(), path.display());

        Ok(Self {
            path,
            inner: Mutex::new(Inner {
                todos,
                file: Some(file),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of all todos in insertion order
    pub async fn all(&self) -> Vec<Item> {
        self.inner.lock().await.todos.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.todos.len()
    }

    /// Append a new open todo with a fresh id and persist the list
    pub async fn add(&self, text: impl Into<String>) -> Result<Item, StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.file.is_none() {
            return Err(StoreError::Closed);
        }

        let item = Item::new(inner.fresh_id(), text.into());
        let mut todos = inner.todos.clone();
        todos.push(item.clone());
        inner.commit(todos).await?;

        tracing::debug!("Added todo {}", item.id);
        Ok(item)
    }

    /// Remove the todo with `id` and persist the list
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.file.is_none() {
            return Err(StoreError::Closed);
        }

        let index = inner.find(id)?;
        let mut todos = inner.todos.clone();
        todos.remove(index);
        inner.commit(todos).await?;

        tracing::debug!("Deleted todo {}", id);
        Ok(())
    }

    /// Set the done flag of the todo with `id` and persist the list
    pub async fn set_state(&self, id: &str, done: bool) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.file.is_none() {
            return Err(StoreError::Closed);
        }

        let index = inner.find(id)?;
        let mut todos = inner.todos.clone();
        todos[index].done = done;
        inner.commit(todos).await?;

        tracing::debug!("Set todo {} done={}", id, done);
        Ok(())
    }

    /// Sync and release the backing file
    ///
    /// Reads keep working on the in-memory list; mutations fail with
    /// [`StoreError::Closed`]. Closing twice is a no-op.
    pub async fn close(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if let Some(file) = inner.file.take() {
            file.sync_all()?;
            tracing::info!("Closed todo file {}", self.path.display());
        }
        Ok(())
    }
}
