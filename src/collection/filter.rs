use crate::collection::Clippings;
use crate::domain::{AnnotationKind, Clipping};
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// A field of a [`Clipping`] paired with the value it must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMatch<'a> {
    Book(&'a str),
    Kind(AnnotationKind),
    Place(&'a str),
    Timestamp(NaiveDateTime),
    Text(&'a str),
}

impl FieldMatch<'_> {
    pub fn matches(&self, clipping: &Clipping) -> bool {
        match *self {
            FieldMatch::Book(book) => clipping.book() == book,
            FieldMatch::Kind(kind) => clipping.kind() == kind,
            FieldMatch::Place(place) => clipping.place() == place,
            FieldMatch::Timestamp(timestamp) => clipping.timestamp() == timestamp,
            FieldMatch::Text(text) => clipping.text() == text,
        }
    }
}

/// The listing criteria of a clippings browser.
///
/// Criteria combine with logical AND. Every call to [`apply`](Self::apply)
/// starts again from the full collection, so changing one criterion never
/// depends on the result of a previous filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippingFilter {
    /// Kinds that are shown. Defaults to all of them.
    pub kinds: BTreeSet<AnnotationKind>,

    /// Exact book title to restrict to, or `None` for every book.
    pub book: Option<String>,

    /// Substring the clipping text must contain, or `None` for no text filter.
    pub text: Option<String>,
}

impl Default for ClippingFilter {
    fn default() -> Self {
        Self {
            kinds: AnnotationKind::ALL.into_iter().collect(),
            book: None,
            text: None,
        }
    }
}

impl ClippingFilter {
    /// The browser's "revert" state: notes and highlights shown, bookmarks
    /// hidden, no book or text restriction.
    pub fn reset() -> Self {
        Self {
            kinds: [AnnotationKind::Note, AnnotationKind::Highlight]
                .into_iter()
                .collect(),
            book: None,
            text: None,
        }
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = AnnotationKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Shows or hides one kind, keeping the others as they are.
    pub fn show(mut self, kind: AnnotationKind, visible: bool) -> Self {
        if visible {
            self.kinds.insert(kind);
        } else {
            self.kinds.remove(&kind);
        }
        self
    }

    pub fn with_book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    /// Sets the text filter. An empty string clears it.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn matches(&self, clipping: &Clipping) -> bool {
        self.book
            .as_deref()
            .is_none_or(|book| clipping.book() == book)
            && self.kinds.contains(&clipping.kind())
            && self
                .text
                .as_deref()
                .is_none_or(|text| clipping.text().contains(text))
    }

    /// The clippings passing every criterion, in collection order.
    pub fn apply<'a>(&self, clippings: &'a Clippings) -> Vec<&'a Clipping> {
        clippings.iter().filter(|c| self.matches(c)).collect()
    }
}
