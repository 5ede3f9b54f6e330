//! Domain model structs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create struct for inserts
//! - A change-set struct (all `Option` fields) for updates

pub mod todo;
