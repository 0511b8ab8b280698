//! Input symbols and immutable input words.
//!
//! A [`Word`] is the unit every cache operation is keyed on: an ordered,
//! immutable sequence of symbols. The empty word (epsilon) addresses the
//! root of a cache tree.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

/// Bounds every input symbol must satisfy.
///
/// Blanket-implemented; any `Clone + Eq + Hash + Debug` type is a symbol.
pub trait Symbol: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Symbol for T {}

/// Immutable ordered sequence of input symbols.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Word<I> {
    symbols: Vec<I>,
}

impl<I> Word<I> {
    /// The empty word.
    pub const fn epsilon() -> Self {
        Self { symbols: Vec::new() }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// `true` for the empty word.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `idx`, if in range.
    pub fn symbol(&self, idx: usize) -> Option<&I> {
        self.symbols.get(idx)
    }

    /// Iterate the symbols front to back.
    pub fn iter(&self) -> core::slice::Iter<'_, I> {
        self.symbols.iter()
    }

    /// Borrow the symbols as a slice.
    pub fn as_slice(&self) -> &[I] {
        &self.symbols
    }

    /// Consume the word, returning its symbols.
    pub fn into_vec(self) -> Vec<I> {
        self.symbols
    }
}

impl<I: Clone> Word<I> {
    /// Word consisting of a single symbol.
    pub fn singleton(sym: I) -> Self {
        Self { symbols: alloc::vec![sym] }
    }

    /// Build a word from a slice of symbols.
    pub fn from_slice(symbols: &[I]) -> Self {
        Self { symbols: symbols.to_vec() }
    }

    /// This word followed by `sym`.
    pub fn append(&self, sym: I) -> Self {
        let mut symbols = Vec::with_capacity(self.symbols.len() + 1);
        symbols.extend_from_slice(&self.symbols);
        symbols.push(sym);
        Self { symbols }
    }

    /// This word followed by `other`.
    pub fn concat(&self, other: &Word<I>) -> Self {
        let mut symbols = Vec::with_capacity(self.symbols.len() + other.symbols.len());
        symbols.extend_from_slice(&self.symbols);
        symbols.extend_from_slice(&other.symbols);
        Self { symbols }
    }

    /// The first `len` symbols (the whole word if `len` exceeds its length).
    pub fn prefix(&self, len: usize) -> Self {
        let end = len.min(self.symbols.len());
        Self::from_slice(&self.symbols[..end])
    }

    /// All prefixes, shortest first: epsilon, then one symbol, up to the word itself.
    pub fn prefixes(&self) -> impl Iterator<Item = Word<I>> + '_ {
        (0..=self.symbols.len()).map(move |n| self.prefix(n))
    }
}

impl Word<char> {
    /// Word over `char` symbols, one per character of `s`.
    pub fn from_chars(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<I> Default for Word<I> {
    fn default() -> Self {
        Self::epsilon()
    }
}

impl<I> From<Vec<I>> for Word<I> {
    fn from(symbols: Vec<I>) -> Self {
        Self { symbols }
    }
}

impl From<&str> for Word<char> {
    fn from(s: &str) -> Self {
        Self::from_chars(s)
    }
}

impl<I> FromIterator<I> for Word<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self { symbols: iter.into_iter().collect() }
    }
}

impl<'a, I> IntoIterator for &'a Word<I> {
    type Item = &'a I;
    type IntoIter = core::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl<I> AsRef<[I]> for Word<I> {
    fn as_ref(&self) -> &[I] {
        &self.symbols
    }
}

impl<I: fmt::Debug> fmt::Debug for Word<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return f.write_str("ε");
        }
        f.debug_list().entries(self.symbols.iter()).finish()
    }
}
