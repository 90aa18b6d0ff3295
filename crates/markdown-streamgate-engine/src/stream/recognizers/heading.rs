/// ATX headings: a line-leading `#` run.
///
/// The run alone is undecidable (a stray `#` looks the same), so it is held
/// without a marker; the character after the run resolves it either way and
/// the span commits literally.
pub struct Heading;

impl Heading {
    pub const MARK: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    pub fn starts(pending: &str) -> bool {
        pending == "#"
    }

    pub fn still_valid(pending: &str) -> bool {
        let run = pending.bytes().take_while(|&b| b == Self::MARK).count();
        run == pending.len() && run <= Self::MAX_LEVEL
    }
}
