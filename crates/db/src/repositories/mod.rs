//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! `&PgPool` as the first argument, or `&mut PgConnection` when the call
//! must run inside a caller-owned transaction.

pub mod place_repo;
pub mod user_repo;

pub use place_repo::PlaceRepo;
pub use user_repo::UserRepo;
