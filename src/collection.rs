//! The in-memory clipping collection and its queries.
//!
//! A [`Clippings`] value is built once from the text of an export and is
//! read-only afterwards. Loading a different file means building a new
//! collection; nothing is updated in place, so a collection can be shared
//! across threads freely.
//!
//! # Usage
//!
//! ```rust
//! use clippings_core::collection::{Clippings, ClippingFilter};
//! use clippings_core::domain::AnnotationKind;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let export = "\
//! Cain (Jose Saramago)
//! - Highlight Loc. 92-94  | Added on Monday, January 11, 2010, 06:07 PM
//!
//! Quién ha desobedecido mis órdenes...
//! ==========
//! ";
//! let clippings = Clippings::parse(export)?;
//! assert_eq!(clippings.books(), vec!["Cain (Jose Saramago)"]);
//!
//! let filter = ClippingFilter::default()
//!     .with_kinds([AnnotationKind::Highlight])
//!     .with_text("órdenes");
//! assert_eq!(filter.apply(&clippings).len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod filter;

pub use filter::{ClippingFilter, FieldMatch};

use crate::domain::{Clipping, InvalidStructure};
use crate::error::{ClipError, ClipResult};
use crate::export::{repair, split_blocks};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// How a malformed block affects the rest of the parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// The first malformed block aborts the whole parse.
    #[default]
    Abort,
    /// Malformed blocks are skipped and reported alongside the records.
    SkipInvalid,
}

/// Records of a parse, plus the blocks skipped in [`ParseMode::SkipInvalid`].
#[derive(Debug, Default)]
pub struct ParseReport {
    pub clippings: Clippings,
    /// Zero-based block index and the error for every skipped block.
    pub skipped: Vec<(usize, InvalidStructure)>,
}

/// An ordered collection of clippings, in the order they appear in the export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clippings {
    items: Vec<Clipping>,
}

impl Clippings {
    /// An empty collection, used when an export could not be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses export text, aborting on the first malformed block.
    ///
    /// # Errors
    /// Returns [`ClipError::Structure`] naming the failing block.
    pub fn parse(text: &str) -> ClipResult<Self> {
        Ok(Self::parse_with(text, ParseMode::Abort)?.clippings)
    }

    /// Parses export text with an explicit [`ParseMode`].
    ///
    /// In [`ParseMode::Abort`] the first malformed block is returned as
    /// [`ClipError::Structure`], so the report never lists skipped blocks.
    pub fn parse_with(text: &str, mode: ParseMode) -> ClipResult<ParseReport> {
        let mut report = ParseReport::default();
        for (block, raw) in split_blocks(text).into_iter().enumerate() {
            match Clipping::parse(raw) {
                Ok(clipping) => report.clippings.items.push(clipping),
                Err(source) if mode == ParseMode::Abort => {
                    return Err(ClipError::Structure { block, source });
                }
                Err(e) => {
                    warn!(block, error = %e, "skipping malformed clipping");
                    report.skipped.push((block, e));
                }
            }
        }

        info!(
            clippings = report.clippings.len(),
            skipped = report.skipped.len(),
            "parsed clippings export"
        );
        Ok(report)
    }

    /// Repairs raw export bytes and parses them.
    pub fn from_bytes(raw: &[u8], mode: ParseMode) -> ClipResult<ParseReport> {
        Self::parse_with(&repair(raw), mode)
    }

    /// Reads and parses an export file from disk.
    ///
    /// # Errors
    /// - [`ClipError::NotFound`] if `path` does not exist
    /// - [`ClipError::Io`] if reading fails
    /// - [`ClipError::Structure`] for a malformed block in [`ParseMode::Abort`]
    pub fn open(path: &Path, mode: ParseMode) -> ClipResult<ParseReport> {
        let raw = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ClipError::NotFound(path.to_path_buf()),
            _ => ClipError::Io(e),
        })?;
        Self::from_bytes(&raw, mode)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Clipping> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clipping> {
        self.items.iter()
    }

    /// Distinct book titles in the order they are first seen.
    pub fn books(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(Clipping::book)
            .filter(|book| seen.insert(*book))
            .collect()
    }

    /// Distinct book titles, sorted.
    pub fn sorted_books(&self) -> Vec<&str> {
        let mut books = self.books();
        books.sort_unstable();
        books
    }

    /// Clippings whose field equals the given value, in collection order.
    pub fn filter_by(&self, field: FieldMatch<'_>) -> Vec<&Clipping> {
        self.items.iter().filter(|c| field.matches(c)).collect()
    }
}

impl<'a> IntoIterator for &'a Clippings {
    type Item = &'a Clipping;
    type IntoIter = std::slice::Iter<'a, Clipping>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Clipping> for Clippings {
    fn from_iter<I: IntoIterator<Item = Clipping>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
