//! Domain logic for rewriting stored URLs.
//!
//! Everything in this crate is free of I/O: argument validation, the
//! ordered registry of columns to sweep, JSON fragment encoding, the
//! operator confirmation gate and the report text. The database side
//! lives in `relink-db`.

pub mod confirm;
pub mod error;
pub mod json_fragment;
pub mod report;
pub mod targets;
pub mod url;
