use chrono::NaiveDateTime;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, trace};

/// The single structural error raised while decoding a clipping block.
///
/// Each variant names the check that failed and carries the exact text
/// that failed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStructure {
    #[error("cannot parse metadata line \"{0}\"")]
    MetadataLine(String),
    #[error("unknown item type \"{0}\"")]
    UnknownKind(String),
    #[error("cannot parse timestamp \"{0}\"")]
    Timestamp(String),
    #[error("blank line expected, got \"{0}\"")]
    BlankLineExpected(String),
}

/// What kind of annotation a clipping is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKind {
    Note,
    Bookmark,
    Highlight,
}

impl AnnotationKind {
    pub const ALL: [AnnotationKind; 3] = [
        AnnotationKind::Note,
        AnnotationKind::Bookmark,
        AnnotationKind::Highlight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationKind::Note => "Note",
            AnnotationKind::Bookmark => "Bookmark",
            AnnotationKind::Highlight => "Highlight",
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotationKind {
    type Err = InvalidStructure;

    /// Case-sensitive: only `Note`, `Bookmark` and `Highlight` are accepted.
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        AnnotationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == word)
            .ok_or_else(|| InvalidStructure::UnknownKind(word.to_owned()))
    }
}

static METADATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- (\w+) (.+?) +\| Added on (.+)$").expect("metadata pattern is valid")
});

static PLACE_BOILERPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:on )?(?:Page|Loc\.)").expect("place pattern is valid"));

/// Timestamp layouts written by the device, tried in order against the text
/// that follows the weekday.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%B %d, %Y, %I:%M %p",
    "%B %d, %Y %I:%M:%S %p",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
];

/// One annotation decoded from a block of the clippings export.
///
/// Clippings are immutable once parsed; every field is always present,
/// though `text` may be empty (bookmarks usually carry no body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipping {
    book: String,
    kind: AnnotationKind,
    place: String,
    timestamp: NaiveDateTime,
    text: String,
}

impl Clipping {
    /// Decodes a single block into a clipping.
    ///
    /// The block must look like:
    ///
    /// ```text
    /// Cain (Jose Saramago)
    /// - Highlight Loc. 92-94  | Added on Monday, January 11, 2010, 06:07 PM
    ///
    /// Quién ha desobedecido mis órdenes...
    /// ```
    ///
    /// Line 1 is the book, line 2 the metadata, line 3 must be blank and the
    /// rest is the body. Checks run in that order and the first failure is
    /// returned as an [`InvalidStructure`].
    pub fn parse(block: &str) -> Result<Clipping, InvalidStructure> {
        trace!(block, "parsing clipping block");
        let mut lines = block.lines();

        let book = lines.next().unwrap_or_default().to_owned();
        debug!(%book, "book title");

        let metadata = lines.next().unwrap_or_default();
        let (kind, place, timestamp) = Self::read_metadata(metadata)?;
        debug!(%kind, %place, %timestamp, "metadata");

        if let Some(line) = lines.next() {
            if !line.trim().is_empty() {
                return Err(InvalidStructure::BlankLineExpected(line.to_owned()));
            }
        }

        let text = lines.collect::<Vec<_>>().join("\n");

        Ok(Clipping {
            book,
            kind,
            place,
            timestamp,
            text,
        })
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// Location on the device with the `Page`/`Loc.` boilerplate removed.
    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn read_metadata(
        line: &str,
    ) -> Result<(AnnotationKind, String, NaiveDateTime), InvalidStructure> {
        let caps = METADATA_LINE
            .captures(line)
            .ok_or_else(|| InvalidStructure::MetadataLine(line.to_owned()))?;

        let place = strip_place_boilerplate(&caps[2]);
        let kind = caps[1].parse::<AnnotationKind>()?;
        let timestamp = parse_timestamp(&caps[3])?;

        Ok((kind, place, timestamp))
    }
}

/// Removes every `Page`/`Loc.` token (optionally preceded by `on `) and
/// trims what is left, so `on Page 45` becomes `45`.
pub fn strip_place_boilerplate(place: &str) -> String {
    PLACE_BOILERPLATE.replace_all(place, "").trim().to_owned()
}

/// Parses a device timestamp such as `Monday, January 11, 2010, 06:07 PM`
/// or `Sunday, 6 March 2016 14:56:36`.
///
/// The leading weekday is informational: the date alone decides the result,
/// so a weekday that disagrees with it is ignored.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, InvalidStructure> {
    let trimmed = text.trim();
    let dated = match trimmed.split_once(", ") {
        Some((weekday, rest)) if weekday.chars().all(char::is_alphabetic) => rest,
        _ => trimmed,
    };

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(dated, format).ok())
        .ok_or_else(|| InvalidStructure::Timestamp(text.to_owned()))
}
