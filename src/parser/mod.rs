//! Line-level source scanning.
//!
//! This module provides the building blocks the formatters share:
//! - [`comment`]: Block comment boundary detection threaded line by line
//! - [`patterns`]: Precompiled regex patterns for documentation value cleanup

pub mod comment;
pub mod patterns;

pub use comment::{toggles, CommentState, CLOSE_MARKER, OPEN_MARKER};
