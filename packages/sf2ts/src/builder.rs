/**
 * Position-Aware Text Builder
 *
 * Accumulates declaration text in chunks, each optionally anchored to a
 * source offset range, and resolves the accumulated chunk lengths into
 * absolute (source offset, dest offset) alignment pairs.
 */
use serde::{Deserialize, Serialize};

/// One association between an offset in generated declaration text and an
/// offset in the original source text.
///
/// Pairs come in start/end couples for a single token: the start pair marks
/// where the generated token begins, the end pair where it ends. Consumers
/// use the delta between consecutive pairs to recover span lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentPair {
    #[serde(rename = "sourcePos")]
    pub source_pos: usize,
    #[serde(rename = "destPos")]
    pub dest_pos: usize,
}

impl AlignmentPair {
    pub fn new(source_pos: usize, dest_pos: usize) -> Self {
        AlignmentPair {
            source_pos,
            dest_pos,
        }
    }
}

/// A chunk-length delta not yet resolved to an absolute destination offset.
#[derive(Debug, Clone, Copy)]
struct PendingMapping {
    source_pos: Option<usize>,
    dest_delta_pos: usize,
}

/// Builds output text while recording where anchored chunks land.
///
/// Unanchored text accumulates as a pending length that is flushed into the
/// next recorded mapping, so only anchored tokens produce alignment pairs.
/// Offsets are byte offsets on both sides.
#[derive(Debug, Default)]
pub struct PositionAwareTextBuilder {
    mappings: Vec<PendingMapping>,
    text_parts: Vec<String>,
    pending_len: usize,
}

impl PositionAwareTextBuilder {
    pub fn new() -> Self {
        PositionAwareTextBuilder {
            mappings: Vec::new(),
            text_parts: Vec::new(),
            pending_len: 0,
        }
    }

    /// Appends `text`. When `source_start` is given, the chunk is anchored:
    /// a start mapping is recorded before the append and, if `source_end` is
    /// also given, an end mapping immediately after. Without `source_end` the
    /// chunk's length stays pending and coalesces with following unanchored
    /// appends.
    pub fn add_text(
        &mut self,
        text: &str,
        source_start: Option<usize>,
        source_end: Option<usize>,
    ) -> &mut Self {
        if self.pending_len != 0 || source_start.is_some() {
            self.mappings.push(PendingMapping {
                source_pos: source_start,
                dest_delta_pos: self.pending_len,
            });
        }
        self.pending_len = text.len();
        if let Some(end) = source_end {
            self.mappings.push(PendingMapping {
                source_pos: Some(end),
                dest_delta_pos: text.len(),
            });
            self.pending_len = 0;
        }
        self.text_parts.push(text.to_string());
        self
    }

    /// Appends unanchored text.
    pub fn add_plain(&mut self, text: &str) -> &mut Self {
        self.add_text(text, None, None)
    }

    /// Appends text anchored to the source span `[start, end)`.
    pub fn add_anchored(&mut self, text: &str, start: usize, end: usize) -> &mut Self {
        self.add_text(text, Some(start), Some(end))
    }

    /// The concatenation of all appended chunks, in call order.
    pub fn build(&self) -> String {
        self.text_parts.concat()
    }

    /// Resolves the pending deltas into absolute destination offsets and
    /// returns the alignment pairs in emission order. `dest_pos` is
    /// non-decreasing; `source_pos` carries no ordering guarantee.
    pub fn alignment(&self) -> Vec<AlignmentPair> {
        let mut pairs = Vec::new();
        let mut dest_pos = 0usize;
        for mapping in &self.mappings {
            dest_pos += mapping.dest_delta_pos;
            if let Some(source_pos) = mapping.source_pos {
                pairs.push(AlignmentPair::new(source_pos, dest_pos));
            }
        }
        pairs
    }
}
