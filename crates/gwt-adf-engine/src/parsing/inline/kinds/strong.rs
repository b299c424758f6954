/// Bold span inline type with owned delimiter constant.
///
/// A strong span is the shortest `**...**` stretch: the first marker after
/// an opener closes it, and spans never nest.
pub struct Strong;

impl Strong {
    /// The double-asterisk marker that opens and closes a strong span.
    pub const MARKER: &'static [u8; 2] = b"**";
}
