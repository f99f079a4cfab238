/// Task business rules
///
/// `TaskService` sits between the HTTP endpoints and the repository. It rejects
/// tasks whose due date has already passed, checks that a task exists before
/// updating or deleting it, and logs every operation. The service holds no state
/// of its own.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskmgr_shared::models::task::TaskItem;
/// use taskmgr_shared::repository::memory::InMemoryTaskRepository;
/// use taskmgr_shared::services::task_service::TaskService;
/// use chrono::{Duration, Utc};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let service = TaskService::new(Arc::new(InMemoryTaskRepository::new()));
///
/// let created = service
///     .create_task(TaskItem::new("Ship release", Utc::now() + Duration::days(2)))
///     .await?;
///
/// assert_eq!(service.get_task_by_id(created.id).await?, Some(created));
/// # Ok(())
/// # }
/// ```

use crate::models::task::TaskItem;
use crate::repository::{RepositoryError, TaskRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// Task service error types
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// The task's due date is earlier than now
    #[error("Due date cannot be in the past")]
    DueDateInPast { due_date: DateTime<Utc> },

    /// No task with this id exists
    #[error("Task not found")]
    NotFound { id: i32 },

    /// Storage failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TaskServiceError {
    /// Whether the error was caused by the caller's input rather than storage
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TaskServiceError::DueDateInPast { .. } | TaskServiceError::NotFound { .. }
        )
    }
}

/// Task service result type alias
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Business-rule layer over a `TaskRepository`
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Creates a service backed by the given repository
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_tasks(&self) -> TaskServiceResult<Vec<TaskItem>> {
        info!("Fetching all tasks");
        Ok(self.repository.get_all().await?)
    }

    pub async fn get_task_by_id(&self, id: i32) -> TaskServiceResult<Option<TaskItem>> {
        info!(task_id = id, "Fetching task");
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Returns the first task assigned to `user_id`, if any
    pub async fn get_task_by_user_id(&self, user_id: i32) -> TaskServiceResult<Option<TaskItem>> {
        info!(user_id, "Fetching task by assigned user");
        Ok(self.repository.get_by_user_id(user_id).await?)
    }

    /// Stores a new task and returns it with its assigned id
    ///
    /// # Errors
    ///
    /// - `DueDateInPast` if `task.due_date` is earlier than the current time
    pub async fn create_task(&self, task: TaskItem) -> TaskServiceResult<TaskItem> {
        if task.is_due_in_past(Utc::now()) {
            warn!(due_date = %task.due_date, "Rejected task with a due date in the past");
            return Err(TaskServiceError::DueDateInPast {
                due_date: task.due_date,
            });
        }

        let created = self.repository.add(task).await?;
        info!(task_id = created.id, "Task created");
        Ok(created)
    }

    /// Overwrites the stored task with `task.id`
    ///
    /// # Errors
    ///
    /// - `NotFound` if no task with `task.id` exists
    pub async fn update_task(&self, task: TaskItem) -> TaskServiceResult<()> {
        let id = task.id;
        self.ensure_exists(id, "update").await?;

        self.repository.update(task).await?;
        info!(task_id = id, "Task updated");
        Ok(())
    }

    /// Removes the task with `id`
    ///
    /// # Errors
    ///
    /// - `NotFound` if no task with `id` exists
    pub async fn delete_task(&self, id: i32) -> TaskServiceResult<()> {
        self.ensure_exists(id, "delete").await?;

        self.repository.delete(id).await?;
        info!(task_id = id, "Task deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: i32, action: &str) -> TaskServiceResult<()> {
        if self.repository.get_by_id(id).await?.is_none() {
            warn!(task_id = id, action, "Task does not exist");
            return Err(TaskServiceError::NotFound { id });
        }
        Ok(())
    }
}
