use std::borrow::Cow;
use tracing::warn;

/// Sanitizes raw export bytes into text.
///
/// Valid UTF-8 is returned unchanged. Otherwise every line (terminators
/// kept) that is itself valid passes through, and invalid lines keep only
/// their valid character runs. Nothing is reinterpreted under another
/// encoding, and applying `repair` to its own output is a no-op.
pub fn repair(raw: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(raw) {
        return text.to_owned();
    }

    let mut repaired = String::with_capacity(raw.len());
    let mut dirty_lines = 0usize;

    for line in raw.split_inclusive(|&b| b == b'\n') {
        match clean_line(line) {
            Cow::Borrowed(valid) => repaired.push_str(valid),
            Cow::Owned(cleaned) => {
                dirty_lines += 1;
                repaired.push_str(&cleaned);
            }
        }
    }

    warn!(dirty_lines, "dropped invalid byte sequences from clippings export");
    repaired
}

fn clean_line(line: &[u8]) -> Cow<'_, str> {
    if let Ok(valid) = std::str::from_utf8(line) {
        return Cow::Borrowed(valid);
    }

    Cow::Owned(line.utf8_chunks().map(|chunk| chunk.valid()).collect())
}
