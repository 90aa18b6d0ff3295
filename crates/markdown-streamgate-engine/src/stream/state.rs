/// Closed set of construct families a pending span can belong to.
///
/// `Text` means no construct currently owns the pending tail. Every other
/// variant is created by a recognizer's start predicate and destroyed by a
/// commit (the construct completed or was ruled out) or a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Text,
    Link,
    Image,
    Emphasis,
    InlineCode,
    CodeBlock,
    Heading,
    List,
    Table,
    RawTag,
    HorizontalRule,
    Blockquote,
}

impl ConstructKind {
    /// Every kind a recognizer can open, in no particular order.
    pub const ALL: [ConstructKind; 11] = [
        ConstructKind::Link,
        ConstructKind::Image,
        ConstructKind::Emphasis,
        ConstructKind::InlineCode,
        ConstructKind::CodeBlock,
        ConstructKind::Heading,
        ConstructKind::List,
        ConstructKind::Table,
        ConstructKind::RawTag,
        ConstructKind::HorizontalRule,
        ConstructKind::Blockquote,
    ];

    /// Stable identifier, used for default marker names and config keys.
    pub fn name(self) -> &'static str {
        match self {
            ConstructKind::Text => "text",
            ConstructKind::Link => "link",
            ConstructKind::Image => "image",
            ConstructKind::Emphasis => "emphasis",
            ConstructKind::InlineCode => "inline-code",
            ConstructKind::CodeBlock => "code-block",
            ConstructKind::Heading => "heading",
            ConstructKind::List => "list",
            ConstructKind::Table => "table",
            ConstructKind::RawTag => "raw-tag",
            ConstructKind::HorizontalRule => "horizontal-rule",
            ConstructKind::Blockquote => "blockquote",
        }
    }

    /// Reverse of [`ConstructKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Per-stream classifier state.
///
/// One instance per independent stream, exclusively owned by its caller.
/// Between calls: `consumed == committed.len() + pending.len()` (byte
/// counts), and the external parser has only ever seen
/// `committed + placeholder(open, pending)`.
#[derive(Debug, Clone)]
pub struct StreamState {
    /// Text already confirmed safe. Grows monotonically; rewritten only by a
    /// full reset.
    pub(crate) committed: String,
    /// The tail span currently being classified.
    pub(crate) pending: String,
    /// Which recognizer owns `pending`, if any.
    pub(crate) open: ConstructKind,
    /// Bytes of input already folded into `committed + pending`.
    pub(crate) consumed: usize,
    /// Cached fence-guard verdict over `committed + pending`.
    pub(crate) in_fence: bool,
}

impl StreamState {
    pub fn new() -> Self {
        Self {
            committed: String::new(),
            pending: String::new(),
            open: ConstructKind::Text,
            consumed: 0,
            in_fence: false,
        }
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn open_construct(&self) -> ConstructKind {
        self.open
    }

    /// Promote `pending` into `committed` and release the open construct.
    ///
    /// The one mutation that grows `committed`; irreversible short of a full
    /// reset.
    pub(crate) fn commit(&mut self) {
        let tail = std::mem::take(&mut self.pending);
        self.committed.push_str(&tail);
        self.open = ConstructKind::Text;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Does `input` extend what this state has already consumed?
    ///
    /// Checked slicing: a byte-boundary mismatch reads as "does not extend",
    /// which routes through the ordinary reset path.
    pub(crate) fn extends(&self, input: &str) -> bool {
        input.get(..self.committed.len()) == Some(self.committed.as_str())
            && input.get(self.committed.len()..self.consumed) == Some(self.pending.as_str())
    }

    pub(crate) fn consistent(&self) -> bool {
        self.consumed == self.committed.len() + self.pending.len()
    }
}

impl Default for StreamState {
    fn default() -> Self {
        Self::new()
    }
}
