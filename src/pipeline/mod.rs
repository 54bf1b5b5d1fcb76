pub mod extraction;
pub mod formatter;
pub mod narrative;
