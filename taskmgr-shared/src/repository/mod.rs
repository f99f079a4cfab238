/// Task storage
///
/// This module defines the storage contract used by the service layer. Backends
/// are swappable: the service only ever sees `Arc<dyn TaskRepository>`.
///
/// # Backends
///
/// - `memory`: Process-local store, lost on restart
///
/// # Example
///
/// ```
/// use taskmgr_shared::models::task::TaskItem;
/// use taskmgr_shared::repository::{memory::InMemoryTaskRepository, TaskRepository};
/// use chrono::{Duration, Utc};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let repo = InMemoryTaskRepository::new();
/// let task = repo.add(TaskItem::new("Write report", Utc::now() + Duration::days(1))).await?;
///
/// assert_eq!(task.id, 1);
/// assert!(repo.get_by_id(1).await?.is_some());
/// # Ok(())
/// # }
/// ```

pub mod memory;

use crate::models::task::TaskItem;
use async_trait::async_trait;

/// Repository error types
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage contract for tasks
///
/// Absence is not an error here: lookups return `None` and `update` reports
/// whether anything matched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task in storage order
    async fn get_all(&self) -> RepositoryResult<Vec<TaskItem>>;

    /// Returns the task with the given id
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<TaskItem>>;

    /// Returns the first task assigned to the given user
    async fn get_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<TaskItem>>;

    /// Assigns the next id and stores the task
    ///
    /// Any id on the input is ignored. Returns the stored record.
    async fn add(&self, task: TaskItem) -> RepositoryResult<TaskItem>;

    /// Overwrites every field but `id` of the task with `task.id`
    ///
    /// Returns `false` without error when no such task exists.
    async fn update(&self, task: TaskItem) -> RepositoryResult<bool>;

    /// Removes all tasks with the given id and returns how many were removed
    async fn delete(&self, id: i32) -> RepositoryResult<usize>;
}
