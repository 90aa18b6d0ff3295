/// Unordered list markers.
///
/// `+` is the only bullet this recognizer owns outright: `-` runs belong to
/// [`super::rule::Rule`] and `*` to [`super::emphasis::Emphasis`], both of
/// which commit the `marker + space` form literally, which is all a list
/// marker needs. Ordered-list digits are deliberately not held; hiding every
/// line-leading number costs more than the flicker it would prevent.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: u8 = b'+';

    pub fn starts(pending: &str) -> bool {
        pending == "+"
    }

    pub fn still_valid(pending: &str) -> bool {
        pending == "+"
    }
}
