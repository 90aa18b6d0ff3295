/// Pipe tables.
///
/// A table only exists once its header row and delimiter row are both on
/// screen, so the span holds across the first line break (each line on its
/// own still looks valid) and commits after the second one. While a line is
/// mid-flight its trailing emptiness is not judged; that is the lookahead
/// exception the commit engine relies on.
pub struct Table;

impl Table {
    pub const PIPE: u8 = b'|';

    pub fn starts(pending: &str) -> bool {
        pending == "|"
    }

    pub fn still_valid(pending: &str) -> bool {
        let newlines = pending.bytes().filter(|&b| b == b'\n').count();
        if newlines >= 2 {
            return false;
        }
        if newlines == 1 {
            let Some(break_at) = pending.find('\n') else {
                return false;
            };
            let second = &pending[break_at + 1..];
            // Wait for the next character before judging the second line.
            match second.bytes().next() {
                None => true,
                Some(b'|' | b'-' | b':' | b' ') => true,
                Some(_) => false,
            }
        } else {
            true
        }
    }

    pub fn settled(pending: &str) -> bool {
        pending != "|"
    }
}
