/// Thematic breaks and setext underlines: line-leading `-` or `=` runs.
///
/// The run is ambiguous the whole way (`-` could be a list marker, `--` a
/// half-typed rule or a setext underline), so it is held without a marker;
/// whatever character breaks the run commits the span literally, the line
/// break included for a completed rule.
pub struct Rule;

impl Rule {
    pub const MARKERS: [char; 2] = ['-', '='];

    pub fn starts(pending: &str) -> bool {
        matches!(pending, "-" | "=")
    }

    pub fn still_valid(pending: &str) -> bool {
        let bytes = pending.as_bytes();
        let Some(&marker) = bytes.first() else {
            return false;
        };
        bytes.iter().all(|&b| b == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_run_held() {
        assert!(Rule::still_valid("-"));
        assert!(Rule::still_valid("---"));
        assert!(Rule::still_valid("====="));
    }

    #[test]
    fn resolved_by_any_other_char() {
        assert!(!Rule::still_valid("- "));
        assert!(!Rule::still_valid("---\n"));
        assert!(!Rule::still_valid("-x"));
        assert!(!Rule::still_valid("-="));
    }
}
