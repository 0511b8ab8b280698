//! Insert-or-conflict cache for consistent observation sources.
//!
//! Once a word's acceptance is committed it is immutable. Re-inserting the
//! same value is a no-op; inserting the opposite value fails with
//! [`ConflictError`] and leaves the tree unchanged.
//!
//! ```rust
//! use accept_cache::{Alphabet, Construction, IncrementalDfaTreeBuilder, Word};
//!
//! let mut cache = IncrementalDfaTreeBuilder::new(Alphabet::characters('a', 'b'));
//! let ab = Word::from_chars("ab");
//! cache.insert(&ab, true).unwrap();
//! assert_eq!(cache.lookup(&ab), (true, Some(true)));
//! assert!(cache.insert(&ab, false).is_err());
//! ```

use tracing::debug;

use crate::acceptance::Acceptance;
use crate::alphabet::Alphabet;
use crate::config::TreeConfig;
use crate::construction::{Construction, IncrementalConstruction};
use crate::error::{CacheError, ConflictError};
use crate::tree::DfaTree;
use crate::word::{Symbol, Word};

/// Tree-shaped cache whose committed values never change.
#[derive(Clone, Debug)]
pub struct IncrementalDfaTreeBuilder<I: Symbol> {
    tree: DfaTree<I, ()>,
}

impl<I: Symbol> IncrementalDfaTreeBuilder<I> {
    /// Empty cache over `alphabet`.
    pub fn new(alphabet: Alphabet<I>) -> Self {
        Self::with_config(alphabet, TreeConfig::default())
    }

    /// Empty cache over `alphabet` with explicit configuration.
    pub fn with_config(alphabet: Alphabet<I>, config: TreeConfig) -> Self {
        Self {
            tree: DfaTree::new(alphabet, &config),
        }
    }

    /// Commit `accept` for `word`.
    ///
    /// Fails with [`CacheError::Conflict`] if the opposite value is already
    /// committed, or [`CacheError::UnknownSymbol`] if `word` leaves the alphabet.
    pub fn insert(&mut self, word: &Word<I>, accept: bool) -> Result<(), CacheError<I>> {
        let id = self.tree.walk_or_create(word)?;
        let node = self.tree.node_mut(id);
        let existing = node.acceptance();
        let attempted = Acceptance::from_bool(accept);

        if existing == Acceptance::Unknown {
            node.set_acceptance(attempted);
        } else if existing != attempted {
            debug!(len = word.len(), %existing, %attempted, "conflicting insert rejected");
            return Err(ConflictError {
                word: word.clone(),
                existing,
                attempted,
            }
            .into());
        }
        Ok(())
    }

    /// The input alphabet.
    pub fn input_alphabet(&self) -> &Alphabet<I> {
        self.tree.alphabet()
    }

    /// Current alphabet size.
    pub fn input_alphabet_size(&self) -> usize {
        self.tree.alphabet().size()
    }

    /// Dense index of `sym`.
    pub fn input_index(&self, sym: &I) -> Option<usize> {
        self.tree.input_index(sym)
    }
}

impl<I: Symbol> Construction<I> for IncrementalDfaTreeBuilder<I> {
    type Provenance = ();

    fn tree(&self) -> &DfaTree<I, ()> {
        &self.tree
    }

    fn add_alphabet_symbol(&mut self, sym: I) -> bool {
        self.tree.add_alphabet_symbol(sym)
    }
}

impl<I: Symbol> IncrementalConstruction<I> for IncrementalDfaTreeBuilder<I> {
    fn insert(&mut self, word: &Word<I>, accept: bool) -> Result<(), CacheError<I>> {
        IncrementalDfaTreeBuilder::insert(self, word, accept)
    }
}
