/// Task model
///
/// This module provides the `TaskItem` record tracked by the service, along with
/// its priority and status enumerations.
///
/// # Wire Format
///
/// ```json
/// {
///   "id": 1,
///   "title": "Write report",
///   "description": "Quarterly numbers",
///   "dueDate": "2030-01-01T09:00:00Z",
///   "priority": "High",
///   "status": "InProgress",
///   "assignedUserId": 7
/// }
/// ```
///
/// Only `dueDate` is required when deserializing; every other field falls back
/// to its default (`0`, empty strings, `Low`, `Pending`, `null`).
///
/// # Example
///
/// ```
/// use taskmgr_shared::models::task::{TaskItem, TaskPriority, TaskStatus};
/// use chrono::{Duration, Utc};
///
/// let task = TaskItem::new("Write report", Utc::now() + Duration::days(1))
///     .with_priority(TaskPriority::High)
///     .with_assigned_user(7);
///
/// assert_eq!(task.status, TaskStatus::Pending);
/// assert!(!task.is_due_in_past(Utc::now()));
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

/// Task progress status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    Pending,

    /// Work has started
    InProgress,

    /// Work is done
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    /// Identifier assigned by the repository on creation
    #[serde(default)]
    pub id: i32,

    /// Short label
    #[serde(default)]
    pub title: String,

    /// Free-text detail
    #[serde(default)]
    pub description: String,

    /// Deadline; must not be earlier than the time of creation or update
    pub due_date: DateTime<Utc>,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default)]
    pub status: TaskStatus,

    /// User the task is assigned to. Not checked against any user store.
    #[serde(default)]
    pub assigned_user_id: Option<i32>,
}

impl TaskItem {
    /// Creates an unsaved task (id 0) with default priority and status
    pub fn new(title: impl Into<String>, due_date: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            due_date,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            assigned_user_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_assigned_user(mut self, user_id: i32) -> Self {
        self.assigned_user_id = Some(user_id);
        self
    }

    /// Returns true when the due date lies strictly before `now`
    pub fn is_due_in_past(&self, now: DateTime<Utc>) -> bool {
        self.due_date < now
    }

    /// Copies every field except `id` from `other`
    pub fn overwrite_from(&mut self, other: &TaskItem) {
        self.title.clone_from(&other.title);
        self.description.clone_from(&other.description);
        self.due_date = other.due_date;
        self.priority = other.priority;
        self.status = other.status;
        self.assigned_user_id = other.assigned_user_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn test_enum_as_str() {
        assert_eq!(TaskPriority::Low.as_str(), "Low");
        assert_eq!(TaskPriority::Medium.as_str(), "Medium");
        assert_eq!(TaskPriority::High.as_str(), "High");
        assert_eq!(TaskStatus::Pending.as_str(), "Pending");
        assert_eq!(TaskStatus::InProgress.as_str(), "InProgress");
        assert_eq!(TaskStatus::Completed.as_str(), "Completed");
    }

    #[test]
    fn test_is_due_in_past() {
        let now = Utc::now();

        assert!(TaskItem::new("late", now - Duration::days(1)).is_due_in_past(now));
        assert!(!TaskItem::new("soon", now + Duration::days(1)).is_due_in_past(now));
        // Exactly now is not in the past
        assert!(!TaskItem::new("now", now).is_due_in_past(now));
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let now = Utc::now();
        let mut stored = TaskItem::new("old", now);
        stored.id = 3;

        let mut incoming = TaskItem::new("new", now + Duration::hours(2))
            .with_description("details")
            .with_priority(TaskPriority::High)
            .with_status(TaskStatus::Completed)
            .with_assigned_user(9);
        incoming.id = 42;

        stored.overwrite_from(&incoming);

        assert_eq!(stored.id, 3);
        assert_eq!(stored.title, "new");
        assert_eq!(stored.description, "details");
        assert_eq!(stored.due_date, incoming.due_date);
        assert_eq!(stored.priority, TaskPriority::High);
        assert_eq!(stored.status, TaskStatus::Completed);
        assert_eq!(stored.assigned_user_id, Some(9));
    }

    #[test]
    fn test_serializes_camel_case() {
        let task = TaskItem::new("t", Utc::now())
            .with_status(TaskStatus::InProgress)
            .with_assigned_user(1);

        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("dueDate").is_some());
        assert_eq!(value["assignedUserId"], 1);
        assert_eq!(value["status"], "InProgress");
        assert_eq!(value["priority"], "Low");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let task: TaskItem = serde_json::from_value(json!({
            "dueDate": "2030-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(task.id, 0);
        assert_eq!(task.title, "");
        assert_eq!(task.priority, TaskPriority::Low);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.assigned_user_id, None);
    }

    #[test]
    fn test_deserialize_requires_due_date() {
        let result: Result<TaskItem, _> = serde_json::from_value(json!({ "title": "x" }));
        assert!(result.is_err());
    }
}
