//! Core business data structures.

pub mod comment;
pub mod like;

pub use comment::{Comment, NewComment};
pub use like::{Like, LikeTarget};
