/// Horizontal rule block type. Matches only the exact marker after trimming.
pub struct Separator;

impl Separator {
    pub const MARKER: &'static str = "---";

    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}
