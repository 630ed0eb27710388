//! Source text normalization.
//!
//! This module contains the rewriting logic organized into submodules:
//! - [`tabs`]: Replaces tab characters with a fixed run of spaces
//! - [`indenter`]: Infers the current indentation unit and rewrites it to the target width
//! - [`docblock`]: Locates the documentation block and normalizes its banner and key lines
//! - [`keys`]: Key alias and canonical key tables used by the documentation normalizer
//! - [`date`]: Canonicalizes `Date` values

pub mod date;
pub mod docblock;
pub mod indenter;
pub mod keys;
pub mod tabs;

pub use date::canonicalize_date;
pub use docblock::{locate_doc_block, DocBlockSpan, DocNormalizer};
pub use indenter::{infer_indent_width, rewrite_indent};
pub use keys::KeyTable;
pub use tabs::replace_tabs;
