/// Emphasis runs: `*`/`_` (italic, bold, bold-italic) and `~~`
/// (strikethrough).
///
/// The opening run caps at three markers (two for tildes); a closing run at
/// least as long completes the span. Whitespace directly after the run means
/// it never opened (`* ` is a list marker or a rule line, not emphasis) and
/// commits literally.
pub struct Emphasis;

impl Emphasis {
    pub const MARKERS: [char; 3] = ['*', '_', '~'];

    pub fn starts(pending: &str) -> bool {
        matches!(pending, "*" | "_" | "~")
    }

    pub fn still_valid(pending: &str) -> bool {
        let bytes = pending.as_bytes();
        let Some(&marker) = bytes.first() else {
            return false;
        };
        let open = bytes.iter().take_while(|&&b| b == marker).count();
        let cap = if marker == b'~' { 2 } else { 3 };
        if open == bytes.len() {
            // Run still growing.
            return open <= cap;
        }
        if open > cap || (marker == b'~' && open < 2) {
            return false;
        }
        if pending.contains("\n\n") {
            return false;
        }
        let Some(next) = pending[open..].chars().next() else {
            return false;
        };
        if next.is_whitespace() {
            return false;
        }
        let close = bytes.iter().rev().take_while(|&&b| b == marker).count();
        close < open
    }

    /// A lone tilde could still be plain prose (`~/path`, approximation
    /// signs), so it carries no marker until a second character arrives.
    pub fn settled(pending: &str) -> bool {
        pending != "~"
    }
}
