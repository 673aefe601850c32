//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts, built by the caller after validation
//! - An update DTO (all `Option` fields) for patches where one applies

pub mod log;
pub mod project;
pub mod reward;
pub mod user;
