//! # Tree Linkification
//!
//! Applies [`tokenize`] to every text node of a caller-supplied tree. The
//! engine knows nothing about the concrete node type; callers implement
//! [`LinkifyNode`] for their view layer.
//!
//! - Text nodes are replaced by one node per segment.
//! - Elements whose tag is in [`LinkifyOptions::ignored_tags`] are kept as is,
//!   children included.
//! - Every other element gets a fresh key, then its children are visited.
//!
//! Keys come from an explicit [`KeyCounter`] threaded through the walk.

use crate::options::LinkifyOptions;
use crate::tokenize::tokenize;

/// A node in a caller's tree.
pub trait LinkifyNode: Sized {
    /// The text of a text node; `None` for elements.
    fn text(&self) -> Option<&str>;

    /// The tag of an element; `None` for text nodes.
    fn tag(&self) -> Option<&str>;

    /// Mutable access to an element's children, if it has any.
    fn children_mut(&mut self) -> Option<&mut Vec<Self>>;

    fn set_key(&mut self, key: String);

    /// Builds a link node showing `text` and pointing at `href`.
    fn link(text: &str, href: String, key: String) -> Self;

    /// Builds a plain-text node.
    fn plain(text: &str, key: String) -> Self;
}

/// Hands out `{base}-{n}` keys, `n` starting at 1.
#[derive(Debug, Clone)]
pub struct KeyCounter {
    base: String,
    issued: usize,
}

impl KeyCounter {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            issued: 0,
        }
    }

    pub fn next_key(&mut self) -> String {
        self.issued += 1;
        format!("{}-{}", self.base, self.issued)
    }

    /// Number of keys handed out so far.
    pub fn issued(&self) -> usize {
        self.issued
    }
}

/// Linkifies `nodes` and everything below them.
pub fn linkify_nodes<N: LinkifyNode>(
    nodes: Vec<N>,
    options: &LinkifyOptions,
    keys: &mut KeyCounter,
) -> Vec<N> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        linkify_node(node, options, keys, &mut out);
    }
    out
}

fn linkify_node<N: LinkifyNode>(
    mut node: N,
    options: &LinkifyOptions,
    keys: &mut KeyCounter,
    out: &mut Vec<N>,
) {
    if let Some(segments) = node.text().map(tokenize) {
        for segment in segments {
            let key = keys.next_key();
            out.push(match segment.href(&options.default_scheme) {
                Some(href) => N::link(&segment.text, href, key),
                None => N::plain(&segment.text, key),
            });
        }
        return;
    }

    if node.tag().is_some_and(|tag| options.is_ignored(tag)) {
        out.push(node);
        return;
    }

    node.set_key(keys.next_key());
    if let Some(children) = node.children_mut() {
        let taken = std::mem::take(children);
        *children = linkify_nodes(taken, options, keys);
    }
    out.push(node);
}
