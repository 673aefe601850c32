//! Pure domain types and rules for the project board.
//!
//! Nothing in this crate performs I/O; it is shared by the database layer,
//! the HTTP API and the board client.

pub mod account;
pub mod error;
pub mod ownership;
pub mod status;
pub mod theme;
pub mod types;
pub mod validation;
