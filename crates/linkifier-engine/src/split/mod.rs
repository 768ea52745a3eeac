//! # Bracket-Aware Splitter
//!
//! Pre-segments text before link matching:
//!
//! 1. Runs of whitespace become their own fragments, so whitespace is never
//!    merged into a candidate link.
//! 2. A non-whitespace fragment that starts with a non-alphanumeric character
//!    has matching wrapper pairs (see [`BracketPair::TABLE`]) peeled from both
//!    ends at once: `([https://example.org])` becomes `([`,
//!    `https://example.org`, `])`.
//!
//! Fragments always concatenate back to the input.

pub mod brackets;

pub use brackets::BracketPair;

use crate::span::Span;

/// Fragments shorter than this (in chars) are never peeled.
const MIN_PEEL_LEN: usize = 3;

/// Splits `input` into fragments. See the module docs for the rules.
pub fn split(input: &str) -> Vec<&str> {
    split_spans(input)
        .into_iter()
        .map(|sp| sp.slice(input))
        .collect()
}

/// Like [`split`], returning byte spans into `input` instead of slices.
pub fn split_spans(input: &str) -> Vec<Span> {
    let mut out = Vec::new();
    for run in whitespace_runs(input) {
        let s = run.slice(input);
        if s.starts_with(char::is_whitespace) {
            out.push(run);
        } else {
            peel(s, run.start, &mut out);
        }
    }
    out
}

/// Splits into alternating whitespace and non-whitespace runs.
fn whitespace_runs(input: &str) -> Vec<Span> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev_ws: Option<bool> = None;

    for (i, c) in input.char_indices() {
        let ws = c.is_whitespace();
        if prev_ws.is_some_and(|p| p != ws) {
            runs.push(Span::new(start, i));
            start = i;
        }
        prev_ws = Some(ws);
    }
    if start < input.len() {
        runs.push(Span::new(start, input.len()));
    }
    runs
}

/// Peels wrapper pairs off `fragment`, pushing one span when nothing peels
/// and three (openers, inner, closers) otherwise.
fn peel(fragment: &str, base: usize, out: &mut Vec<Span>) {
    let chars: Vec<(usize, char)> = fragment.char_indices().collect();
    let len = chars.len();

    let whole = Span::new(base, base + fragment.len());
    if len < MIN_PEEL_LEN || chars[0].1.is_alphanumeric() {
        out.push(whole);
        return;
    }

    let mut depth = 0;
    // inner content must stay non-empty
    while len > (1 + depth) * 2 {
        let open = chars[depth].1;
        let close = chars[len - 1 - depth].1;
        if BracketPair::find(open, close).is_none() {
            break;
        }
        depth += 1;
    }

    if depth == 0 {
        out.push(whole);
        return;
    }

    let inner_start = base + chars[depth].0;
    let inner_end = base + chars[len - depth].0;
    out.push(Span::new(whole.start, inner_start));
    out.push(Span::new(inner_start, inner_end));
    out.push(Span::new(inner_end, whole.end));
}
