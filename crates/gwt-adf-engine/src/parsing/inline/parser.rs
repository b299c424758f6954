use crate::document::Run;

use super::{cursor::Cursor, kinds::Strong};

/// Splits a line into styled [`Run`]s.
///
/// Each `**...**` span becomes one emphasized run with the markers removed.
/// Pairing is non-greedy: the first marker after an opener closes the span.
/// Text between spans is emitted as plain runs, one per contiguous stretch.
///
/// Never fails and never drops text. An opener with no closing marker is
/// kept verbatim, markers included, in the surrounding plain run. An empty
/// pair (`****`) yields no run and does not split the plain text around it.
///
/// Input with no spans yields a single plain run; empty input yields none.
pub fn format_inline(s: &str) -> Vec<Run> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut plain = String::new();
    let mut text_start = cur.pos();

    fn flush_plain(out: &mut Vec<Run>, plain: &mut String) {
        if !plain.is_empty() {
            out.push(Run::plain(std::mem::take(plain)));
        }
    }

    while let Some(open) = cur.seek(Strong::MARKER) {
        cur.bump_n(Strong::MARKER.len());
        let inner_start = cur.pos();

        let Some(close) = cur.seek(Strong::MARKER) else {
            // Unmatched opener: the remainder stays plain text.
            break;
        };

        plain.push_str(cur.slice(text_start, open));
        let inner = cur.slice(inner_start, close);
        cur.bump_n(Strong::MARKER.len());
        text_start = cur.pos();

        if inner.is_empty() {
            continue;
        }
        flush_plain(&mut out, &mut plain);
        out.push(Run::emphasized(inner));
    }

    plain.push_str(&s[text_start..]);
    flush_plain(&mut out, &mut plain);
    out
}
