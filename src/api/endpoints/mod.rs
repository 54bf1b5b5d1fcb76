//! API endpoint handlers.

pub mod health;
pub mod narrative;
pub mod summarize;
