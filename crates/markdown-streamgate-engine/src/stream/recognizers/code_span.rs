/// Inline code delimited by backtick runs.
///
/// Code spans are raw zones: once one opens, nothing inside it is
/// reinterpreted until the closing run arrives. Line-leading runs that grow
/// to fence length are taken over by the fence guard before this recognizer
/// ever rules on them.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    pub fn starts(pending: &str) -> bool {
        pending == "`"
    }

    /// Open while the backtick run is still growing or the closing run has
    /// not arrived. A closing run of exactly the opening length completes the
    /// span; a blank line rules it out (inline context cannot cross a block
    /// boundary).
    pub fn still_valid(pending: &str) -> bool {
        let open = pending.bytes().take_while(|&b| b == Self::TICK).count();
        if open == pending.len() {
            return true;
        }
        if pending.contains("\n\n") {
            return false;
        }
        let close = pending.bytes().rev().take_while(|&b| b == Self::TICK).count();
        close != open
    }
}
