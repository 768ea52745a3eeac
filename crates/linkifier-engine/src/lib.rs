//! # linkifier-engine
//!
//! Splits free-form text into an ordered, lossless sequence of link and
//! plain-text [`Segment`]s.
//!
//! ## Pipeline
//!
//! ```text
//! Text → split() → fragments → find_links() → Segments
//!        (brackets,             (URL / email
//!         whitespace)            matcher)
//! ```
//!
//! Concatenating the `text` of every segment reproduces the input exactly:
//!
//! ```
//! use linkifier_engine::tokenize;
//!
//! let input = "see (https://example.org).";
//! let segments = tokenize(input);
//! let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
//! assert_eq!(rebuilt, input);
//! ```
//!
//! ## Modules
//!
//! - **`split`**: whitespace-retaining splitter that peels wrapping pairs
//! - **`matcher`**: URL and email recognition with trailing punctuation policy
//! - **`scheme`**: derives an href from a link's display text
//! - **`tokenize`**: composes the above into [`Segment`]s
//! - **`tree`**: generic visitor that linkifies a caller-supplied node tree
//! - **`invariants`**: lossless partition checks used by tests

pub mod invariants;
pub mod matcher;
pub mod options;
pub mod scheme;
pub mod segment;
pub mod span;
pub mod split;
pub mod tokenize;
pub mod tree;

pub use matcher::{LinkKind, LinkMatch, find_links, is_link};
pub use options::LinkifyOptions;
pub use scheme::{Scheme, add_scheme_if_needed};
pub use segment::Segment;
pub use span::Span;
pub use split::split;
pub use tokenize::tokenize;
pub use tree::{KeyCounter, LinkifyNode, linkify_nodes};
