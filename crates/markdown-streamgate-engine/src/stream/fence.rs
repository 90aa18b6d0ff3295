//! Unterminated-fence detection.
//!
//! Content inside an open fenced code block must pass through as literal
//! text; while a fence is open the classifier suppresses every recognizer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub marker: char,
    pub len: usize,
}

pub struct Fence;

impl Fence {
    pub const MIN_LEN: usize = 3;
    pub const MARKERS: [char; 2] = ['`', '~'];

    /// Parses a line as a fence delimiter run: marker char and run length.
    /// Up to three leading spaces are allowed.
    fn delimiter(line: &str) -> Option<(FenceSig, &str)> {
        let line = line.trim_end_matches('\r');
        let stripped = line.trim_start_matches(' ');
        if line.len() - stripped.len() > 3 {
            return None;
        }
        let marker = stripped.chars().next().filter(|c| Self::MARKERS.contains(c))?;
        let len = stripped.chars().take_while(|&c| c == marker).count();
        if len < Self::MIN_LEN {
            return None;
        }
        Some((FenceSig { marker, len }, &stripped[len..]))
    }

    /// A fence-opening line: delimiter run, optionally followed by an info
    /// string (which may itself still be streaming in).
    pub fn opens(line: &str) -> Option<FenceSig> {
        Fence::delimiter(line).map(|(sig, _)| sig)
    }

    /// A fence-closing line: same marker, at least as long a run, nothing but
    /// whitespace after it.
    pub fn closes(open: FenceSig, line: &str) -> bool {
        match Fence::delimiter(line) {
            Some((sig, rest)) => {
                sig.marker == open.marker && sig.len >= open.len && rest.trim().is_empty()
            }
            None => false,
        }
    }
}

/// Returns true when `text` ends inside an opened, not-yet-closed fence.
///
/// Line-by-line scan; the final line counts both ways, so a half-typed
/// opener like ```` ```js ```` already reads as "inside".
pub fn inside_unclosed_fence(text: &str) -> bool {
    let mut open: Option<FenceSig> = None;
    for line in text.split('\n') {
        match open {
            None => open = Fence::opens(line),
            Some(sig) => {
                if Fence::closes(sig, line) {
                    open = None;
                }
            }
        }
    }
    open.is_some()
}
