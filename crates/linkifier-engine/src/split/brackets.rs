/// A pair of characters that can wrap a link, e.g. `(` and `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

impl BracketPair {
    /// Recognized wrappers, in priority order. The first matching entry wins.
    pub const TABLE: &'static [BracketPair] = &[
        BracketPair::new('(', ')'),
        BracketPair::new('[', ']'),
        BracketPair::new('{', '}'),
        BracketPair::new('<', '>'),
        BracketPair::new('¿', '?'),
        BracketPair::new('¡', '!'),
        BracketPair::new('«', '»'),
        BracketPair::new('"', '"'),
        BracketPair::new('*', '*'),
        BracketPair::new('_', '_'),
        BracketPair::new('~', '~'),
    ];

    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Looks up the table entry wrapping a fragment that starts with `open`
    /// and ends with `close`.
    pub fn find(open: char, close: char) -> Option<BracketPair> {
        Self::TABLE
            .iter()
            .copied()
            .find(|pair| pair.open == open && pair.close == close)
    }
}
