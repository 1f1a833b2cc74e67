//! Row and detail formatting for displaying clippings.

use crate::domain::{AnnotationKind, Clipping};

const SHORT_TEXT_LIMIT: usize = 100;
const SHORT_TEXT_KEEP: usize = 99;
const ELLIPSIS: &str = "(…)";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One line of a clippings listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub kind: AnnotationKind,
    pub timestamp: String,
    pub book: String,
    /// Single-line preview of the text, truncated past 100 characters.
    pub short_text: String,
    pub full_text: String,
}

impl From<&Clipping> for ListingRow {
    fn from(clipping: &Clipping) -> Self {
        ListingRow {
            kind: clipping.kind(),
            timestamp: clipping.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            book: clipping.book().to_owned(),
            short_text: short_text(clipping.text()),
            full_text: clipping.text().to_owned(),
        }
    }
}

impl ListingRow {
    /// Tab-separated form used by the command line listing.
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.kind, self.timestamp, self.book, self.short_text
        )
    }
}

fn short_text(text: &str) -> String {
    let preview = if text.chars().count() > SHORT_TEXT_LIMIT {
        let kept: String = text.chars().take(SHORT_TEXT_KEEP).collect();
        kept + ELLIPSIS
    } else {
        text.to_owned()
    };
    preview.replace('\n', " ")
}

/// Full view of a single clipping.
pub fn detail(clipping: &Clipping) -> String {
    format!(
        "Book: {}\n{} {}\n\n{}",
        clipping.book(),
        clipping.kind(),
        clipping.timestamp().format(TIMESTAMP_FORMAT),
        clipping.text()
    )
}

pub fn status_line(shown: usize) -> String {
    format!("Showing {shown} clippings")
}
