//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept a scoped `&mut PgConnection` as the first argument.

pub mod todo_repo;

pub use todo_repo::TodoRepo;
