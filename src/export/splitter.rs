use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// The line separating two clippings in the export.
pub const DELIMITER: &str = "==========";

static DELIMITER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+==========[\r\n]+").expect("delimiter pattern is valid"));

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Splits the export text into raw clipping blocks, in file order.
///
/// The delimiter line and the line breaks around it never belong to a block.
/// A leading byte-order mark is dropped, the last block loses its trailing
/// line breaks, and whitespace-only segments at the end of the file yield no
/// block. Block contents are not validated here.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let mut blocks: Vec<&str> = DELIMITER_LINE.split(text).collect();

    while blocks.last().is_some_and(|block| block.trim().is_empty()) {
        blocks.pop();
    }

    if let Some(last) = blocks.pop() {
        let mut last = last.trim_end_matches(['\r', '\n']);
        // A file ending in a bare delimiter with no line break after it.
        if let Some(rest) = last
            .strip_suffix(DELIMITER)
            .filter(|rest| rest.is_empty() || rest.ends_with(['\r', '\n']))
        {
            last = rest.trim_end_matches(['\r', '\n']);
        }
        blocks.push(last);
    }

    while blocks.last().is_some_and(|block| block.trim().is_empty()) {
        blocks.pop();
    }

    debug!(blocks = blocks.len(), "split clippings export");
    blocks
}
