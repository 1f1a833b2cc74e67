//! Handling of the raw "My Clippings" export before any record is parsed.
//!
//! The device appends every highlight, note and bookmark to a single text
//! file, separating entries with a line of ten `=` characters. This module
//! turns that file into the ordered list of raw blocks the parser consumes:
//!
//! - [`encoding::repair`] drops byte sequences that are not valid UTF-8,
//!   line by line, without ever failing.
//! - [`splitter::split_blocks`] cuts the repaired text on the delimiter line.
//!
//! ```rust
//! use clippings_core::export::{encoding::repair, splitter::split_blocks};
//!
//! let raw = b"Book A\n- Bookmark Loc. 1 | Added on Monday, January 11, 2010, 06:07 PM\n\n\n==========\n";
//! let text = repair(raw);
//! assert_eq!(split_blocks(&text).len(), 1);
//! ```

pub mod encoding;
pub mod splitter;

pub use encoding::repair;
pub use splitter::{DELIMITER, split_blocks};
