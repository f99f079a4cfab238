/// In-memory task repository
///
/// Tasks live in a `Vec` in insertion order. The list and the id counter sit
/// behind a single `RwLock`, so ids stay unique and strictly increasing even
/// with concurrent writers. Ids are never reused after a delete.

use super::{RepositoryResult, TaskRepository};
use crate::models::task::TaskItem;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
struct TaskStore {
    tasks: Vec<TaskItem>,
    next_id: i32,
}

/// Process-local task storage
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    store: RwLock<TaskStore>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository whose first id is 1
    pub fn new() -> Self {
        Self {
            store: RwLock::new(TaskStore {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored tasks
    pub async fn len(&self) -> usize {
        self.store.read().await.tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<TaskItem>> {
        Ok(self.store.read().await.tasks.clone())
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<TaskItem>> {
        let store = self.store.read().await;
        Ok(store.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn get_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<TaskItem>> {
        let store = self.store.read().await;
        Ok(store
            .tasks
            .iter()
            .find(|t| t.assigned_user_id == Some(user_id))
            .cloned())
    }

    async fn add(&self, mut task: TaskItem) -> RepositoryResult<TaskItem> {
        let mut store = self.store.write().await;

        task.id = store.next_id;
        store.next_id += 1;
        store.tasks.push(task.clone());

        debug!(task_id = task.id, "Stored task");
        Ok(task)
    }

    async fn update(&self, task: TaskItem) -> RepositoryResult<bool> {
        let mut store = self.store.write().await;

        match store.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                existing.overwrite_from(&task);
                Ok(true)
            }
            None => {
                debug!(task_id = task.id, "Update matched no task");
                Ok(false)
            }
        }
    }

    async fn delete(&self, id: i32) -> RepositoryResult<usize> {
        let mut store = self.store.write().await;

        let before = store.tasks.len();
        store.tasks.retain(|t| t.id != id);
        Ok(before - store.tasks.len())
    }
}
