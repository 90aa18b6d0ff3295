//! Incremental classifier / commit engine.
//!
//! The classifier consumes only the new suffix of the buffer on each call,
//! drives the recognizer table one character at a time and decides when the
//! pending span is promoted into the committed output versus replaced by a
//! placeholder marker. The returned snapshot is always safe to hand to a
//! batch markdown parser.

pub mod fence;
pub mod recognizers;
mod state;

pub use state::{ConstructKind, StreamState};

use crate::placeholder::{self, PlaceholderBindings};

/// Drives [`StreamState`] records through the recognizer table.
///
/// Holds only the caller's placeholder bindings; everything per-stream lives
/// in the externally-owned state, so one classifier can serve any number of
/// streams.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    bindings: PlaceholderBindings,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: PlaceholderBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &PlaceholderBindings {
        &self.bindings
    }

    /// Feed the full buffer-to-date; returns the safe-to-parse snapshot.
    ///
    /// Never fails: a buffer that does not extend the previous one resets the
    /// state (the stream restarted with unrelated content), and any internal
    /// inconsistency degrades to returning the raw buffer so the host always
    /// has something to render.
    pub fn advance(&self, state: &mut StreamState, input: &str) -> String {
        if !state.consistent() || !state.extends(input) {
            state.reset();
        }
        let Some(chunk) = input.get(state.consumed..) else {
            state.reset();
            return input.to_owned();
        };
        if !chunk.is_empty() {
            self.consume(state, chunk);
        }
        self.snapshot(state)
    }

    /// Final call: the stream is complete, so flush the pending span as-is.
    ///
    /// A construct that will never complete must render literally rather
    /// than hide behind a marker forever.
    pub fn finish(&self, state: &mut StreamState, input: &str) -> String {
        self.advance(state, input);
        state.commit();
        state.committed().to_owned()
    }

    fn consume(&self, state: &mut StreamState, chunk: &str) {
        for c in chunk.chars() {
            state.pending.push(c);
            state.consumed += c.len_utf8();

            // Fence guard first: fenced content is literal, always. The
            // verdict only moves on fence-relevant characters, so the line
            // scan is skipped for everything else.
            let was_fenced = state.in_fence;
            if matches!(c, '`' | '~' | '\n') {
                let full = [state.committed.as_str(), state.pending.as_str()].concat();
                state.in_fence = fence::inside_unclosed_fence(&full);
            }
            if was_fenced || state.in_fence {
                state.commit();
                continue;
            }

            if state.open == ConstructKind::Text {
                let line_start = state.committed.is_empty() || state.committed.ends_with('\n');
                let after_word = state
                    .committed
                    .chars()
                    .next_back()
                    .is_some_and(char::is_alphanumeric);
                match recognizers::open_for(&state.pending, line_start, after_word) {
                    Some(r) => state.open = r.kind,
                    // A single ordinary character: plain text is always safe.
                    None => state.commit(),
                }
            } else {
                match recognizers::entry(state.open) {
                    Some(r) if (r.still_valid)(&state.pending) => {}
                    // Completed or ruled out; either way the span flushes.
                    _ => state.commit(),
                }
            }
        }
    }

    fn snapshot(&self, state: &StreamState) -> String {
        if state.open == ConstructKind::Text || state.pending.is_empty() {
            return state.committed.clone();
        }
        let settled = recognizers::entry(state.open)
            .map(|r| (r.settled)(&state.pending))
            .unwrap_or(true);
        if !settled {
            return state.committed.clone();
        }
        let marker = placeholder::resolve(state.open, &state.pending, &self.bindings);
        let mut out = String::with_capacity(state.committed.len() + marker.len());
        out.push_str(&state.committed);
        out.push_str(&marker);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classifier_with(kinds: &[ConstructKind]) -> Classifier {
        let mut bindings = PlaceholderBindings::new();
        for &kind in kinds {
            bindings.bind(kind);
        }
        Classifier::with_bindings(bindings)
    }

    #[test]
    fn plain_text_commits_immediately() {
        let classifier = Classifier::new();
        let mut state = StreamState::new();
        assert_eq!(classifier.advance(&mut state, "hello"), "hello");
        assert_eq!(state.open_construct(), ConstructKind::Text);
    }

    #[test]
    fn open_link_is_hidden_without_bindings() {
        let classifier = Classifier::new();
        let mut state = StreamState::new();
        assert_eq!(classifier.advance(&mut state, "see [docs"), "see ");
        assert_eq!(state.open_construct(), ConstructKind::Link);
        assert_eq!(state.pending(), "[docs");
    }

    #[test]
    fn open_link_shows_marker_with_binding() {
        let classifier = classifier_with(&[ConstructKind::Link]);
        let mut state = StreamState::new();
        let out = classifier.advance(&mut state, "see [docs");
        assert_eq!(out, "see <incomplete-link raw=\"%5Bdocs\"/>");
    }

    #[test]
    fn completed_link_renders_literally() {
        let classifier = classifier_with(&[ConstructKind::Link]);
        let mut state = StreamState::new();
        classifier.advance(&mut state, "see [docs](");
        let out = classifier.advance(&mut state, "see [docs](https://x.com)");
        assert_eq!(out, "see [docs](https://x.com)");
    }

    #[test]
    fn stalled_input_is_idempotent() {
        let classifier = classifier_with(&[ConstructKind::Link, ConstructKind::Emphasis]);
        let mut state = StreamState::new();
        let first = classifier.advance(&mut state, "a **b");
        let second = classifier.advance(&mut state, "a **b");
        assert_eq!(first, second);
    }

    #[test]
    fn discontinuous_input_resets() {
        let classifier = Classifier::new();
        let mut state = StreamState::new();
        classifier.advance(&mut state, "[link](https://example.com");

        let mut fresh = StreamState::new();
        assert_eq!(
            classifier.advance(&mut state, "totally different text"),
            classifier.advance(&mut fresh, "totally different text"),
        );
    }

    #[test]
    fn empty_input_resets_and_yields_nothing() {
        let classifier = Classifier::new();
        let mut state = StreamState::new();
        classifier.advance(&mut state, "some text");
        assert_eq!(classifier.advance(&mut state, ""), "");
        assert_eq!(state.committed(), "");
    }

    #[test]
    fn fenced_content_streams_literally() {
        let classifier = classifier_with(&[ConstructKind::Link]);
        let mut state = StreamState::new();
        let input = "```\n[not a link](x\n";
        assert_eq!(classifier.advance(&mut state, input), input);
        assert_eq!(state.open_construct(), ConstructKind::Text);
    }

    #[test]
    fn fence_close_restores_recognition() {
        let classifier = Classifier::new();
        let mut state = StreamState::new();
        let fenced = "```\ncode\n```\n";
        assert_eq!(classifier.advance(&mut state, fenced), fenced);

        let with_tail = format!("{fenced}[open");
        assert_eq!(classifier.advance(&mut state, &with_tail), fenced);
        assert_eq!(state.open_construct(), ConstructKind::Link);
    }

    #[test]
    fn finish_flushes_pending_literally() {
        let classifier = classifier_with(&[ConstructKind::Emphasis]);
        let mut state = StreamState::new();
        classifier.advance(&mut state, "a **bold");
        assert_eq!(classifier.finish(&mut state, "a **bold"), "a **bold");
        assert_eq!(state.open_construct(), ConstructKind::Text);
    }

    #[test]
    fn heading_run_is_held_then_committed() {
        let classifier = classifier_with(&[ConstructKind::Heading]);
        let mut state = StreamState::new();
        assert_eq!(classifier.advance(&mut state, "#"), "");
        assert_eq!(classifier.advance(&mut state, "# "), "# ");
        assert_eq!(classifier.advance(&mut state, "# Title"), "# Title");
    }

    #[test]
    fn intra_word_asterisk_stays_literal() {
        let classifier = classifier_with(&[ConstructKind::Emphasis]);
        let mut state = StreamState::new();
        assert_eq!(classifier.advance(&mut state, "2*3=6"), "2*3=6");
    }

    #[test]
    fn multibyte_text_commits_cleanly() {
        let classifier = Classifier::new();
        let mut state = StreamState::new();
        assert_eq!(classifier.advance(&mut state, "héllo 世界"), "héllo 世界");
    }
}
