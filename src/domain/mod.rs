//! Domain model for the task tracking service.

pub mod task;

pub use task::{NewTask, Task, TaskPatch};
