//! Parser for plain-text word lists.
//!
//! # Format
//! ```text
//! dog    con chó
//! hello    xin chào; chào
//! ```
//!
//! One entry per line, fields separated by four spaces. The first field is the
//! source term and the rest is the translation. Lines without a translation are
//! skipped.

/// Field separator between the source term and its translation.
pub const DELIMITER: &str = "    ";

/// Word pair read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWord {
    pub source_text: String,
    pub target_text: String,
}

/// Parsed word list plus the number of non-blank lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    pub words: Vec<RawWord>,
    pub skipped: usize,
}

/// Parse word-list content. Never fails: malformed lines are counted and dropped.
pub fn parse(content: &str) -> ParsedList {
    let mut parsed = ParsedList::default();
    if content.trim().is_empty() {
        return parsed;
    }

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(word) => parsed.words.push(word),
            None => parsed.skipped += 1,
        }
    }

    parsed
}

fn parse_line(line: &str) -> Option<RawWord> {
    let (source, rest) = line.split_once(DELIMITER)?;
    let source = source.trim();
    // The remainder keeps any further delimiters as part of the translation.
    let target = rest.trim();
    if source.is_empty() || target.is_empty() {
        return None;
    }

    Some(RawWord {
        source_text: source.to_string(),
        target_text: target.to_string(),
    })
}
