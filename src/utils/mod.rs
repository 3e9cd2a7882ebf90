//! Small shared helpers.

pub mod ids;

pub use ids::parse_id;
