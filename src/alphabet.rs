//! Growable input alphabet with dense symbol indices.
//!
//! Each symbol is assigned the next free index when it is added, so the
//! indices of an alphabet of size `n` are exactly `0..n`. Indices are never
//! reused or reassigned; growth only appends.
//!
//! # Invariants
//! - **No duplicate indices**: a symbol is registered at most once.
//! - **Dense**: `index_of(symbol(i)) == Some(i)` for every `i < size()`.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::word::Symbol;

/// Dense, growable symbol→index mapping.
#[derive(Clone, Debug)]
pub struct Alphabet<I: Symbol> {
    symbols: Vec<I>,
    indices: HashMap<I, usize>,
}

impl<I: Symbol> Alphabet<I> {
    /// An empty alphabet.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Build an alphabet from `symbols`, in order. Duplicates are dropped.
    pub fn from_symbols<T: IntoIterator<Item = I>>(symbols: T) -> Self {
        let mut alphabet = Self::new();
        for sym in symbols {
            alphabet.add_symbol(sym);
        }
        alphabet
    }

    /// Number of registered symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// `true` if no symbol is registered.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// `true` if `sym` is registered.
    pub fn contains(&self, sym: &I) -> bool {
        self.indices.contains_key(sym)
    }

    /// Dense index of `sym`, or `None` if it is not registered.
    pub fn index_of(&self, sym: &I) -> Option<usize> {
        self.indices.get(sym).copied()
    }

    /// Symbol registered at `idx`.
    pub fn symbol(&self, idx: usize) -> Option<&I> {
        self.symbols.get(idx)
    }

    /// Register `sym` and return its index. An already-present symbol keeps its index.
    pub fn add_symbol(&mut self, sym: I) -> usize {
        if let Some(&idx) = self.indices.get(&sym) {
            return idx;
        }
        let idx = self.symbols.len();
        self.indices.insert(sym.clone(), idx);
        self.symbols.push(sym);
        idx
    }

    /// Iterate the symbols in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, I> {
        self.symbols.iter()
    }

    /// Borrow the symbols in index order.
    pub fn as_slice(&self) -> &[I] {
        &self.symbols
    }
}

impl Alphabet<char> {
    /// All characters in the inclusive range `from..=to`.
    pub fn characters(from: char, to: char) -> Self {
        Self::from_symbols(from..=to)
    }
}

impl<I: Symbol> Default for Alphabet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Symbol> FromIterator<I> for Alphabet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::from_symbols(iter)
    }
}

impl<'a, I: Symbol> IntoIterator for &'a Alphabet<I> {
    type Item = &'a I;
    type IntoIter = core::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
