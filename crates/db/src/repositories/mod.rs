//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod column_replace_repo;

pub use column_replace_repo::ColumnReplaceRepo;
