//! Runtime checks for tokenizer output, used by tests.

use crate::segment::Segment;

/// Asserts that `segments` is a lossless, ordered partition of `input`:
/// spans are contiguous and non-empty, each text matches its span, and no
/// two plain segments are adjacent.
pub fn check(input: &str, segments: &[Segment]) {
    let mut cursor = 0;
    let mut prev_plain = false;

    for seg in segments {
        assert_eq!(
            seg.span.start, cursor,
            "gap or overlap before segment {seg:?} (expected start {cursor})"
        );
        assert!(!seg.span.is_empty(), "empty segment: {seg:?}");
        assert!(
            seg.span.end <= input.len(),
            "segment span out of bounds: {:?} (input len: {})",
            seg.span,
            input.len()
        );
        assert_eq!(
            seg.span.slice(input),
            seg.text,
            "segment text does not match its span"
        );
        assert!(
            seg.is_link || !prev_plain,
            "adjacent plain segments not merged at {:?}",
            seg.span
        );
        prev_plain = !seg.is_link;
        cursor = seg.span.end;
    }

    assert_eq!(cursor, input.len(), "segments do not cover the input");
}
