//! Blank-line protection for custom tag regions.
//!
//! The downstream batch parser splits blocks on blank lines (and re-reads
//! list/heading structure on single ones). Inside a matched custom-tag
//! region that segmentation must not fire: `protect` swaps every newline in
//! the region for a unique sentinel token before the parse and `restore`
//! swaps them back on the parser's output.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9_-]*)([^<>]*?)(/?)>").expect("tag pattern"));

/// Sentinel delimiter for protected-newline tokens. Private-use-area, so it
/// cannot collide with markdown syntax and passes through a parser as plain
/// text.
const TOKEN_MARK: char = '\u{E000}';

#[derive(Debug, Clone)]
struct TagMatch {
    start: usize,
    end: usize,
    name: String,
    closing: bool,
    self_closing: bool,
}

fn tags_in(text: &str) -> Vec<TagMatch> {
    TAG.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(TagMatch {
                start: whole.start(),
                end: whole.end(),
                name: caps.get(2)?.as_str().to_owned(),
                closing: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
                self_closing: caps.get(4).is_some_and(|m| !m.as_str().is_empty()),
            })
        })
        .collect()
}

/// Token → original text mapping recorded by [`protect`]; transient, lives
/// for the duration of one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreMap {
    entries: Vec<(String, String)>,
}

impl RestoreMap {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Replaces newlines inside the outermost regions of any tag in `tags` with
/// unique tokens, returning the protected text and the map to undo it.
///
/// Regions are found by matched open/close scanning with same-name nesting;
/// self-closing tags open no region and an unclosed trailing tag extends to
/// the end of the input. Nested regions of a different protected name are
/// covered by the outer region, so only the outermost boundary matters.
pub fn protect(text: &str, tags: &[&str]) -> (String, RestoreMap) {
    let matches = tags_in(text);
    let mut out = String::with_capacity(text.len());
    let mut map = RestoreMap::default();
    let mut counter = 0usize;
    let mut pos = 0usize;
    let mut i = 0usize;

    while i < matches.len() {
        let open = &matches[i];
        if open.closing || open.self_closing || !tags.contains(&open.name.as_str()) {
            i += 1;
            continue;
        }

        // Matching close for this region, tracking same-name nesting.
        let mut depth = 1usize;
        let mut close: Option<usize> = None;
        for (j, candidate) in matches.iter().enumerate().skip(i + 1) {
            if candidate.name == open.name && !candidate.self_closing {
                if candidate.closing {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(j);
                        break;
                    }
                } else {
                    depth += 1;
                }
            }
        }

        let (inner_end, resume_pos, resume_i) = match close {
            Some(j) => (matches[j].start, matches[j].end, j + 1),
            // Unclosed trailing region: runs to end-of-input.
            None => (text.len(), text.len(), matches.len()),
        };

        out.push_str(&text[pos..open.end]);
        let inner = &text[open.end..inner_end];
        for (k, segment) in inner.split('\n').enumerate() {
            if k > 0 {
                let token = format!("{TOKEN_MARK}{counter}{TOKEN_MARK}");
                counter += 1;
                map.entries.push((token.clone(), "\n".to_owned()));
                out.push_str(&token);
            }
            out.push_str(segment);
        }
        out.push_str(&text[inner_end..resume_pos]);
        pos = resume_pos;
        i = resume_i;
    }

    out.push_str(&text[pos..]);
    (out, map)
}

/// Reverses [`protect`] on the parser's output.
pub fn restore(text: &str, map: &RestoreMap) -> String {
    let mut out = text.to_owned();
    for (token, original) in &map.entries {
        out = out.replace(token.as_str(), original);
    }
    out
}
