//! Derives the href for a link from its display text.
//!
//! The segment text is never rewritten; the scheme is only added to the
//! target handed to whatever renders the link.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Scheme prepended to bare hosts, e.g. `http://`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme(String);

impl Scheme {
    pub const DEFAULT: &'static str = "http://";
    pub const MAILTO: &'static str = "mailto:";

    /// Builds a scheme prefix. A bare protocol name such as `ftp` becomes
    /// `ftp://`; anything already containing `:` is kept as given.
    pub fn new(scheme: impl Into<String>) -> Self {
        let mut scheme = scheme.into();
        if !scheme.contains(':') {
            scheme.push_str("://");
        }
        Self(scheme)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scheme {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn has_scheme_regex() -> &'static Regex {
    static HAS_SCHEME: OnceLock<Regex> = OnceLock::new();
    HAS_SCHEME.get_or_init(|| Regex::new(r"^\w+:").expect("Invalid scheme regex"))
}

fn email_regex() -> &'static Regex {
    static EMAIL_CHECK: OnceLock<Regex> = OnceLock::new();
    EMAIL_CHECK.get_or_init(|| {
        Regex::new(r"^[\w.+%\-]+@(?:[\w\-]+\.)+[\w\-]{2,}$").expect("Invalid email regex")
    })
}

/// True if `text` starts with `word-chars:`.
pub fn has_scheme(text: &str) -> bool {
    has_scheme_regex().is_match(text)
}

/// True if the whole of `text` is an email address without a scheme.
pub fn is_email(text: &str) -> bool {
    email_regex().is_match(text)
}

/// Returns the href for `text`: unchanged if it already has a scheme,
/// `mailto:`-prefixed for emails, otherwise prefixed with `default_scheme`.
pub fn add_scheme_if_needed(text: &str, default_scheme: &Scheme) -> String {
    if has_scheme(text) {
        text.to_string()
    } else if is_email(text) {
        format!("{}{text}", Scheme::MAILTO)
    } else {
        format!("{default_scheme}{text}")
    }
}
