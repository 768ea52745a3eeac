use crate::scheme::Scheme;

/// Settings passed from callers through to href derivation and the tree
/// visitor. The tokenizer itself does not read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkifyOptions {
    /// Prepended to links that have no scheme and are not emails.
    pub default_scheme: Scheme,
    /// Prefix for generated node keys (`{key_base}-{n}`).
    pub key_base: String,
    /// Element tags left untouched by [`crate::tree::linkify_nodes`].
    pub ignored_tags: Vec<String>,
}

impl LinkifyOptions {
    pub const DEFAULT_KEY_BASE: &'static str = "linkifier";
    pub const DEFAULT_IGNORED: &'static [&'static str] = &["a", "button"];

    pub fn is_ignored(&self, tag: &str) -> bool {
        self.ignored_tags
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(tag))
    }
}

impl Default for LinkifyOptions {
    fn default() -> Self {
        Self {
            default_scheme: Scheme::default(),
            key_base: Self::DEFAULT_KEY_BASE.to_string(),
            ignored_tags: Self::DEFAULT_IGNORED
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
        }
    }
}
