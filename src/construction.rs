//! Builder capabilities as traits.
//!
//! | Trait | Implemented by | Adds |
//! |-------|----------------|------|
//! | [`Construction`] | every builder | lookup, alphabet growth, views, separating-word search |
//! | [`IncrementalConstruction`] | [`IncrementalDfaTreeBuilder`] | insert-or-conflict |
//! | [`AdaptiveConstruction`] | [`AdaptiveDfaTreeBuilder`] | insert-or-overwrite, oldest input |
//! | [`UserInsertion`] | [`AdaptiveDfaTreeBuilder`] | user-origin inserts |
//!
//! User-origin insertion is an optional capability. Callers holding some
//! [`AdaptiveConstruction`] ask for it with
//! [`AdaptiveConstruction::user_insertion`]; builders without provenance
//! answer `None`. [`insert_from_user`] wraps that query and reports a missing
//! capability as [`CacheError::Unsupported`].
//!
//! [`IncrementalDfaTreeBuilder`]: crate::strict::IncrementalDfaTreeBuilder
//! [`AdaptiveDfaTreeBuilder`]: crate::adaptive::AdaptiveDfaTreeBuilder

use crate::automaton::Dfa;
use crate::error::CacheError;
use crate::tree::DfaTree;
use crate::view::{BoolTreeView, TreeView};
use crate::word::{Symbol, Word};

/// Read access and alphabet growth shared by all builders.
pub trait Construction<I: Symbol> {
    /// Per-node provenance payload of the underlying tree.
    type Provenance;

    /// The underlying tree.
    fn tree(&self) -> &DfaTree<I, Self::Provenance>;

    /// Register `sym`; returns `true` if the alphabet grew.
    fn add_alphabet_symbol(&mut self, sym: I) -> bool;

    /// `(definitive, acceptance)` for `word`.
    fn lookup(&self, word: &Word<I>) -> (bool, Option<bool>) {
        self.tree().lookup(word)
    }

    /// Acceptance of `word`, if committed.
    fn direct_lookup(&self, word: &Word<I>) -> Option<bool> {
        self.lookup(word).1
    }

    /// `true` if a value is committed for `word`.
    fn has_definitive_information(&self, word: &Word<I>) -> bool {
        self.lookup(word).0
    }

    /// A word on which `target` contradicts the cache, if one is reachable via `inputs`.
    fn find_separating_word<D: Dfa<I>>(
        &self,
        target: &D,
        inputs: &[I],
        omit_undefined: bool,
    ) -> Option<Word<I>>
    where
        Self: Sized,
    {
        self.tree().find_separating_word(target, inputs, omit_undefined)
    }

    /// Graph view of the cache.
    fn as_graph(&self) -> TreeView<'_, I, Self::Provenance> {
        self.tree().as_graph()
    }

    /// Transition-system view with `Acceptance` state properties.
    fn as_transition_system(&self) -> TreeView<'_, I, Self::Provenance> {
        self.tree().as_transition_system()
    }

    /// Transition-system view with `bool` state properties.
    fn as_bool_transition_system(&self) -> BoolTreeView<'_, I, Self::Provenance> {
        self.tree().as_bool_transition_system()
    }
}

/// Insert-or-conflict construction.
pub trait IncrementalConstruction<I: Symbol>: Construction<I> {
    /// Commit `accept` for `word`; contradicting a committed value is a conflict.
    fn insert(&mut self, word: &Word<I>, accept: bool) -> Result<(), CacheError<I>>;

    /// Shorthand for `insert(word, true)`.
    fn insert_accepted(&mut self, word: &Word<I>) -> Result<(), CacheError<I>> {
        self.insert(word, true)
    }
}

/// Insert-or-overwrite construction with age tracking.
pub trait AdaptiveConstruction<I: Symbol>: Construction<I> {
    /// Commit `accept` for `word` as an oracle observation.
    ///
    /// Returns `true` if a previously committed, different value was replaced.
    fn insert(&mut self, word: &Word<I>, accept: bool) -> Result<bool, CacheError<I>>;

    /// Word of the least recently refreshed committed fact.
    fn oldest_input(&self) -> Option<&Word<I>>;

    /// The user-origin insertion capability, if this builder has one.
    fn user_insertion(&mut self) -> Option<&mut dyn UserInsertion<I>> {
        None
    }
}

/// User-origin inserts, for builders that track provenance.
pub trait UserInsertion<I: Symbol> {
    /// Commit `accept` for `word` as a user assertion.
    ///
    /// Returns `true` if a previously committed, different value was replaced.
    fn insert_from_user(&mut self, word: &Word<I>, accept: bool) -> Result<bool, CacheError<I>>;
}

/// User-origin insert through the capability query.
///
/// Fails with [`CacheError::Unsupported`] if `builder` has no such capability.
pub fn insert_from_user<I, B>(
    builder: &mut B,
    word: &Word<I>,
    accept: bool,
) -> Result<bool, CacheError<I>>
where
    I: Symbol,
    B: AdaptiveConstruction<I> + ?Sized,
{
    match builder.user_insertion() {
        Some(user) => user.insert_from_user(word, accept),
        None => Err(CacheError::Unsupported {
            capability: "user-origin insertion",
        }),
    }
}
