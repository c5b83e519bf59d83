//! Task tracking HTTP service.
//!
//! A minimal CRUD API over a single `Task` entity backed by a `PostgreSQL`
//! table. The implementation is split into three layers:
//!
//! - [`domain`]: the `Task` entity, drafts, and partial patches
//! - [`infrastructure`]: configuration and the repository implementations
//! - [`api`]: Axum handlers, DTOs, error responses, and routing

pub mod api;
pub mod domain;
pub mod infrastructure;
