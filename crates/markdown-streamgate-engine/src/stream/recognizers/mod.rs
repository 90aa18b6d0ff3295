//! Construct recognizers: one predicate pair per syntactic family.
//!
//! Each recognizer sees only the pending tail, which stays short by
//! construction (it resets on every commit). `starts` fires on the single
//! character that could begin the construct; `still_valid` is re-checked on
//! every subsequent character and goes false the moment the span either
//! completed or can no longer complete — the commit engine does not
//! distinguish the two outcomes.

mod block_quote;
mod code_indent;
mod code_span;
mod emphasis;
mod heading;
mod link;
mod list;
mod raw_tag;
mod rule;
mod table;

pub use block_quote::BlockQuote;
pub use code_indent::Indent;
pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use heading::Heading;
pub use link::{Image, Link};
pub use list::ListMarker;
pub use raw_tag::RawTag;
pub use rule::Rule;
pub use table::Table;

use super::state::ConstructKind;

/// Where a construct is allowed to open. The classifier owns the context a
/// pending-only predicate cannot see (what `committed` ends with) and applies
/// it here instead of inside the predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Anywhere,
    /// Only when the pending span begins a line.
    LineStart,
    /// Not directly after an alphanumeric character; intra-word markers
    /// (`snake_case`, `2*3`) stay literal text.
    NotAfterWord,
}

/// One entry in the priority-ordered recognizer table.
pub struct Recognizer {
    pub kind: ConstructKind,
    pub gate: Gate,
    pub starts: fn(&str) -> bool,
    pub still_valid: fn(&str) -> bool,
    /// Whether the span is unambiguous enough to stand a marker in for it.
    /// Undecided spans are held open silently.
    pub settled: fn(&str) -> bool,
}

fn always(_: &str) -> bool {
    true
}

fn never(_: &str) -> bool {
    false
}

/// Fixed priority order: code constructs first, Image before Link (its
/// syntax is a superset prefix), then the remaining constructs in a stable
/// order. Only the first entry whose gate and start predicate both pass may
/// open. Start characters are disjoint across entries, so ordering is a
/// tie-break, not a dispatch mechanism.
pub static TABLE: &[Recognizer] = &[
    Recognizer {
        kind: ConstructKind::CodeBlock,
        gate: Gate::LineStart,
        starts: Indent::starts,
        still_valid: Indent::still_valid,
        settled: never,
    },
    Recognizer {
        kind: ConstructKind::InlineCode,
        gate: Gate::Anywhere,
        starts: CodeSpan::starts,
        still_valid: CodeSpan::still_valid,
        settled: always,
    },
    Recognizer {
        kind: ConstructKind::Image,
        gate: Gate::Anywhere,
        starts: Image::starts,
        still_valid: Image::still_valid,
        settled: Image::settled,
    },
    Recognizer {
        kind: ConstructKind::Link,
        gate: Gate::Anywhere,
        starts: Link::starts,
        still_valid: Link::still_valid,
        settled: always,
    },
    Recognizer {
        kind: ConstructKind::Emphasis,
        gate: Gate::NotAfterWord,
        starts: Emphasis::starts,
        still_valid: Emphasis::still_valid,
        settled: Emphasis::settled,
    },
    Recognizer {
        kind: ConstructKind::Heading,
        gate: Gate::LineStart,
        starts: Heading::starts,
        still_valid: Heading::still_valid,
        settled: never,
    },
    Recognizer {
        kind: ConstructKind::Blockquote,
        gate: Gate::LineStart,
        starts: BlockQuote::starts,
        still_valid: BlockQuote::still_valid,
        settled: never,
    },
    Recognizer {
        kind: ConstructKind::Table,
        gate: Gate::LineStart,
        starts: Table::starts,
        still_valid: Table::still_valid,
        settled: Table::settled,
    },
    Recognizer {
        kind: ConstructKind::HorizontalRule,
        gate: Gate::LineStart,
        starts: Rule::starts,
        still_valid: Rule::still_valid,
        settled: never,
    },
    Recognizer {
        kind: ConstructKind::List,
        gate: Gate::LineStart,
        starts: ListMarker::starts,
        still_valid: ListMarker::still_valid,
        settled: never,
    },
    Recognizer {
        kind: ConstructKind::RawTag,
        gate: Gate::Anywhere,
        starts: RawTag::starts,
        still_valid: RawTag::still_valid,
        settled: RawTag::settled,
    },
];

/// First recognizer whose gate and start predicate both pass, if any.
pub fn open_for(pending: &str, line_start: bool, after_word: bool) -> Option<&'static Recognizer> {
    TABLE.iter().find(|r| {
        let gated = match r.gate {
            Gate::Anywhere => true,
            Gate::LineStart => line_start,
            Gate::NotAfterWord => !after_word,
        };
        gated && (r.starts)(pending)
    })
}

/// Table entry for an already-open construct.
pub fn entry(kind: ConstructKind) -> Option<&'static Recognizer> {
    TABLE.iter().find(|r| r.kind == kind)
}
