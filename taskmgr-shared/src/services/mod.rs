/// Business-rule services
///
/// - `task_service`: Validation and orchestration for task operations

pub mod task_service;
