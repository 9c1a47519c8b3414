pub mod error;
pub mod notes;
pub mod types;
