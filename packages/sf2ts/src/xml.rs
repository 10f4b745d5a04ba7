/**
 * XML tag scanner
 *
 * Locates element values and their byte spans in descriptor documents by
 * literal tag search. The descriptors read here never put attributes on the
 * elements of interest, so `<name>` matches exactly. Entity references pass
 * through verbatim; spans always index the raw document.
 */
use std::ops::Range;

/// An element value together with its byte span in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan<'a> {
    pub value: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Finds the first `<name>value</name>` at or after byte offset `from` and
/// returns the value span. An unclosed element counts as absent.
pub fn first_tag_from<'a>(content: &'a str, name: &str, from: usize) -> Option<TagSpan<'a>> {
    if from > content.len() {
        return None;
    }
    let open = format!("<{}>", name);
    let close = format!("</{}>", name);
    let open_at = content[from..].find(&open)? + from;
    let start = open_at + open.len();
    let end = content[start..].find(&close)? + start;
    Some(TagSpan {
        value: &content[start..end],
        start,
        end,
    })
}

/// Finds the first `<name>value</name>` in the whole document.
pub fn first_tag<'a>(content: &'a str, name: &str) -> Option<TagSpan<'a>> {
    first_tag_from(content, name, 0)
}

/// Content ranges of every `<name>…</name>` element, in document order.
/// Used for repeated container elements such as label collections.
pub fn element_blocks(content: &str, name: &str) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut from = 0;
    while let Some(span) = first_tag_from(content, name, from) {
        from = span.end;
        blocks.push(span.start..span.end);
    }
    blocks
}
