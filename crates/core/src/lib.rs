//! Domain error taxonomy, shared type aliases, and input validation for
//! the notes service. This crate performs no I/O.

pub mod error;
pub mod notes;
pub mod types;
pub mod users;
