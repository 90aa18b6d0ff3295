/// Indented code openers (the non-fenced half of the code-block family;
/// fenced blocks belong to the fence guard).
///
/// Line-leading space runs are held undecided: four spaces confirm an
/// indented code line and anything shorter stays ordinary indentation.
/// Either way the span commits literally; holding just keeps a half-formed
/// indent from being classified as something else.
pub struct Indent;

impl Indent {
    pub const WIDTH: usize = 4;

    pub fn starts(pending: &str) -> bool {
        pending == " "
    }

    pub fn still_valid(pending: &str) -> bool {
        pending.len() < Self::WIDTH && pending.bytes().all(|b| b == b' ')
    }
}
