//! API layer: handlers, DTOs, errors, and routing.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use dto::{CreateTaskRequest, DeleteTaskResponse, TaskResponse, UpdateTaskRequest};
pub use error::{ApiError, ApiErrorResponse};
pub use handlers::AppState;
pub use routes::{cors_layer, create_router};
