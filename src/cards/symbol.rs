//! Card symbols and the alphabet they are drawn from.
//!
//! Two cards match iff their symbols are equal. The engine never looks
//! inside a symbol; the glyph is only there for the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Matching identity printed on a card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Get the glyph to draw on the card face.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error constructing an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    Empty,
    DuplicateGlyph { glyph: char, index: usize },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::Empty => write!(f, "alphabet must contain at least one symbol"),
            AlphabetError::DuplicateGlyph { glyph, index } => {
                write!(f, "duplicate symbol '{glyph}' at position {index}")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Ordered set of distinct symbols available to the deck builder.
///
/// Defaults to the 26 uppercase Latin letters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet from glyphs. Glyphs must be distinct.
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let mut symbols: Vec<Symbol> = Vec::new();
        for (index, glyph) in glyphs.into_iter().enumerate() {
            if symbols.iter().any(|s| s.0 == glyph) {
                return Err(AlphabetError::DuplicateGlyph { glyph, index });
            }
            symbols.push(Symbol(glyph));
        }
        if symbols.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { symbols })
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in alphabet order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Check if the alphabet contains a symbol.
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: ('A'..='Z').map(Symbol).collect(),
        }
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = AlphabetError;

    fn try_from(glyphs: Vec<char>) -> Result<Self, Self::Error> {
        Self::new(glyphs)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().map(Symbol::glyph).collect()
    }
}
