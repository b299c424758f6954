/// A byte cursor over a single line of inline text.
///
/// Positions are byte offsets into `s`. The cursor only ever stops on
/// ASCII delimiter bytes or at the end of input, so every position it
/// reports is a valid `char` boundary for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to the start of the next occurrence of `pat`, returning its
    /// position. Leaves the cursor untouched when there is none.
    pub fn seek(&mut self, pat: &[u8]) -> Option<usize> {
        let rest = self.s.as_bytes().get(self.i..)?;
        let offset = rest.windows(pat.len()).position(|w| w == pat)?;
        self.i += offset;
        Some(self.i)
    }

    /// Slice of the input between two positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
