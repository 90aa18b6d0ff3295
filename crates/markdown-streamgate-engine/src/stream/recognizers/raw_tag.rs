/// Raw inline tags: `<Custom attr="x">`, `</Custom>`, `<!-- comments -->`.
///
/// Held from `<` until the closing `>` commits the whole tag in one piece,
/// so the downstream parser never sees a half-open angle bracket. A span
/// whose name part could not be a tag name (`<3`, `a<b,`) resolves to
/// literal text as soon as that is knowable.
pub struct RawTag;

impl RawTag {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';

    pub fn starts(pending: &str) -> bool {
        pending == "<"
    }

    pub fn still_valid(pending: &str) -> bool {
        if pending == "<" {
            return true;
        }
        if pending.contains('\n') {
            return false;
        }
        let Some(rest) = pending.strip_prefix('<') else {
            return false;
        };
        if rest.contains('<') {
            return false;
        }
        if rest.contains('>') {
            // The closing bracket completes the tag.
            return false;
        }

        // Name part runs to the first whitespace; the attribute tail after it
        // is not second-guessed.
        let (name, has_tail) = match rest.find(char::is_whitespace) {
            Some(at) => (&rest[..at], true),
            None => (rest, false),
        };
        let name = name.strip_prefix(['/', '!']).unwrap_or(name);
        let mut chars = name.chars();
        match chars.next() {
            // "</", "<!": still waiting for the name itself. A space before
            // any name ("< b") can never become a tag.
            None => !has_tail,
            Some(c) if c.is_ascii_alphabetic() || c == '-' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }
            Some(_) => false,
        }
    }

    pub fn settled(pending: &str) -> bool {
        pending != "<"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<", true)]
    #[case("<C", true)]
    #[case("<Custom attr=\"x\"", true)]
    #[case("<Custom kind=\"a, b\"", true)]
    #[case("</Custom", true)]
    #[case("</", true)]
    #[case("<!-- note", true)]
    #[case("<h1", true)]
    #[case("<Custom>", false)]
    #[case("</Custom>", false)]
    #[case("< ", false)]
    #[case("<3", false)]
    #[case("<b,", false)]
    #[case("<a\nb", false)]
    #[case("<a<b", false)]
    fn tag_boundaries(#[case] pending: &str, #[case] expected: bool) {
        assert_eq!(RawTag::still_valid(pending), expected);
    }
}
