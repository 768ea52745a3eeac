use serde::Serialize;

use crate::scheme::{Scheme, add_scheme_if_needed};
use crate::span::Span;

/// A contiguous piece of the tokenized text, tagged as link or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    /// Where `text` sits in the tokenized input.
    pub span: Span,
    pub is_link: bool,
}

impl Segment {
    pub fn link(input: &str, span: Span) -> Self {
        Self {
            text: span.slice(input).to_string(),
            span,
            is_link: true,
        }
    }

    pub fn plain(input: &str, span: Span) -> Self {
        Self {
            text: span.slice(input).to_string(),
            span,
            is_link: false,
        }
    }

    /// Link target for this segment, or `None` for plain text.
    pub fn href(&self, default_scheme: &Scheme) -> Option<String> {
        self.is_link
            .then(|| add_scheme_if_needed(&self.text, default_scheme))
    }
}
