//! # Link Matcher
//!
//! Finds URL and email substrings in a fragment of text.
//!
//! Three shapes are tried at each start position, in this order:
//!
//! - **Scheme URL**: `scheme:` followed by one or more slashes
//!   (`http:///www.example.org` is accepted), an optional `user@`, a host,
//!   an optional port and an optional path/query/fragment tail.
//! - **Email**: `local@domain.tld`, optionally prefixed with `mailto:`.
//! - **Bare host**: `example.org` or a dotted IPv4 address, with the same
//!   optional port and tail as a scheme URL.
//!
//! The tail runs to the next whitespace, so a query string may embed another
//! full URL. Trailing sentence punctuation is then trimmed from the match.
//!
//! Every shape starts with a letter or digit (or `mailto:`), so a link never
//! begins with a character the splitter would peel.
//!
//! A scheme directly followed by non-slash content (`http:www.example.org`) is
//! not a scheme prefix, and a match may not start right after a word
//! character or URL punctuation, so no bare host is carved out of it either.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::span::Span;

/// Which shape a link was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    Url,
    Email,
}

/// A link found by [`find_links`], with its span relative to the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch {
    pub span: Span,
    pub kind: LinkKind,
}

// Optional port, then a path, query or fragment running to whitespace.
const TAIL: &str = r"(?::\d+\b)?(?:[/?#]\S*)?";

const SCHEME_URL: &str = r"[A-Za-z][A-Za-z0-9+.\-]*:/+(?:[^\s/@]+@)?[\w\-]+(?:\.[\w\-]+)*";

const EMAIL: &str = r"(?i:mailto:)?[\p{L}\p{N}][\w.+%\-]*@(?:[\w\-]+\.)+[\w\-]{2,}";

const BARE_HOST: &str =
    r"(?:\d{1,3}(?:\.\d{1,3}){3}|[\p{L}\p{N}][\w\-]*\.(?:[\w\-]+\.)*\p{L}{2,})\b";

/// Characters that may not directly precede the start of a link.
const NOT_BEFORE: &[char] = &[':', '/', '.', '@', '-', '+', '%', '_'];

/// Closing brackets trimmed from the end of a match only when unbalanced.
const CLOSERS: &[(char, char)] = &[(')', '('), (']', '['), ('}', '{'), ('>', '<')];

/// Matches a link starting exactly at the beginning of the haystack.
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        let pattern = format!(
            r"^(?:(?P<url>{SCHEME_URL}{TAIL})|(?P<email>{EMAIL})|(?P<bare>{BARE_HOST}{TAIL}))"
        );
        Regex::new(&pattern).expect("Invalid link regex")
    })
}

/// Finds all links in `text`, leftmost first and non-overlapping.
///
/// A match is only attempted where a link may start, i.e. at the beginning
/// of `text` or right after a character allowed by [`can_precede`]. Each
/// attempt is anchored, so a long token without such positions is scanned
/// once.
pub fn find_links(text: &str) -> Vec<LinkMatch> {
    let re = link_regex();
    let mut out = Vec::new();
    let mut resume = 0;
    let mut prev: Option<char> = None;

    for (i, c) in text.char_indices() {
        let at_boundary = prev.is_none_or(can_precede);
        prev = Some(c);
        if i < resume || !at_boundary {
            continue;
        }

        let Some(caps) = re.captures(&text[i..]) else {
            continue;
        };
        let Some(m) = caps.get(0) else {
            continue;
        };

        let kind = if caps.name("email").is_some() {
            LinkKind::Email
        } else {
            LinkKind::Url
        };
        let len = trimmed_len(m.as_str());
        if len > 0 {
            out.push(LinkMatch {
                span: Span::new(i, i + len),
                kind,
            });
            resume = i + len;
        }
    }

    out
}

/// Returns true when the whole of `fragment` is a single link.
pub fn is_link(fragment: &str) -> bool {
    match find_links(fragment).as_slice() {
        [only] => only.span == Span::new(0, fragment.len()),
        _ => false,
    }
}

/// True if a link may start right after `c`.
fn can_precede(c: char) -> bool {
    !(c.is_alphanumeric() || NOT_BEFORE.contains(&c))
}

/// Length of `candidate` once trailing sentence punctuation and unbalanced
/// closing brackets are removed.
fn trimmed_len(candidate: &str) -> usize {
    let mut end = candidate.len();
    while let Some(c) = candidate[..end].chars().next_back() {
        let strip = match c {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' => true,
            _ => CLOSERS
                .iter()
                .find(|(close, _)| *close == c)
                .is_some_and(|&(close, open)| is_unbalanced(&candidate[..end], open, close)),
        };
        if !strip {
            break;
        }
        end -= c.len_utf8();
    }
    end
}

fn is_unbalanced(s: &str, open: char, close: char) -> bool {
    let opens = s.chars().filter(|&c| c == open).count();
    let closes = s.chars().filter(|&c| c == close).count();
    closes > opens
}
