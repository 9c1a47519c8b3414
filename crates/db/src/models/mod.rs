//! Domain model structs and DTOs.
//!
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` request payload shared by create and update
//! - Validated write DTOs handed to the repository

pub mod note;
