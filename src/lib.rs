//! # clippings_core
//!
//! Parsing and querying of the "My Clippings" export written by e-reader
//! devices: an append-only text file holding every highlight, note and
//! bookmark the reader has made.
//!
//! ## Architecture
//!
//! - **[`export`]**: encoding repair and splitting of the raw file into blocks
//! - **[`domain`]**: the [`Clipping`](domain::Clipping) record and its block parser
//! - **[`collection`]**: the ordered [`Clippings`](collection::Clippings) collection,
//!   book listing and filtering
//! - **[`listing`]**: row and detail formatting for display
//! - **[`config`]**: resolution of the clippings file to load
//! - **[`error`]**: unified error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clippings_core::collection::{Clippings, ClippingFilter, ParseMode};
//! use clippings_core::config::Settings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::resolve(None);
//! let report = Clippings::open(settings.ensure_exists()?, ParseMode::Abort)?;
//!
//! for book in report.clippings.sorted_books() {
//!     println!("{book}");
//! }
//!
//! let notes_only = ClippingFilter::reset().show(
//!     clippings_core::domain::AnnotationKind::Highlight,
//!     false,
//! );
//! println!("{} notes", notes_only.apply(&report.clippings).len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every malformed block surfaces as [`ClipError::Structure`], carrying the
//! block index and the [`InvalidStructure`](domain::InvalidStructure) check
//! that failed. By default the first malformed block aborts the parse; use
//! [`ParseMode::SkipInvalid`](collection::ParseMode::SkipInvalid) to keep
//! going and collect the failures instead.

pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod listing;

/// Re-exports the most commonly used types for convenience.
pub use collection::{Clippings, ClippingFilter, ParseMode};
pub use domain::{AnnotationKind, Clipping, InvalidStructure};
pub use error::{ClipError, ClipResult};
