//! Domain types, rules, and wire DTOs for the todos service.
//!
//! Has no I/O: the database crate and the API crate both build on it.

pub mod dto;
pub mod error;
pub mod todo;
pub mod types;
