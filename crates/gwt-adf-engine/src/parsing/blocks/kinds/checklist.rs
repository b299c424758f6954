/// Checklist item block type.
///
/// A checklist line opens with one of the configured bullet glyphs followed
/// by a single whitespace character. Items are emitted as plain text: they
/// are not bold-scanned.
pub struct Checklist;

impl Checklist {
    pub fn opens(trimmed: &str, bullets: &[char]) -> bool {
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), Some(next)) => bullets.contains(&glyph) && next.is_whitespace(),
            _ => false,
        }
    }

    /// Rewrites a leading `checkmark` + space to `bullet` + space.
    ///
    /// Works on the untrimmed line so indentation and trailing text survive
    /// unchanged. Lines opening with any other glyph are returned as is.
    pub fn rewrite(line: &str, checkmark: char, bullet: char) -> String {
        let indent = line.len() - line.trim_start().len();
        let (lead, rest) = line.split_at(indent);
        let mut chars = rest.chars();
        if chars.next() == Some(checkmark) && chars.as_str().starts_with(' ') {
            format!("{lead}{bullet}{}", chars.as_str())
        } else {
            line.to_string()
        }
    }
}
