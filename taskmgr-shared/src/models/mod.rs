/// Data models
///
/// # Models
///
/// - `task`: The `TaskItem` record plus its priority and status enums

pub mod task;
