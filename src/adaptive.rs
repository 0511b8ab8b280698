//! Insert-or-overwrite cache with provenance arbitration and age tracking.
//!
//! Observations from a possibly non-deterministic or changing source are
//! allowed to correct one another. Every committed value carries an
//! [`Origin`]; a differing insert replaces it when
//!
//! - the incoming origin equals the stored origin, or
//! - the stored origin is not [`Origin::User`].
//!
//! A user assertion can therefore only be corrected by another user
//! assertion. Replacements are reported, never raised as errors.
//!
//! Each insert that lands on a node refreshes that node in the [`AgeIndex`]
//! (fresh commit, no-op and overwrite alike), so [`oldest_input`] names the
//! fact that has gone longest without being re-observed. Path nodes created
//! on the way to a deeper word are not tracked.
//!
//! [`oldest_input`]: AdaptiveConstruction::oldest_input
//!
//! # Invariants
//! - `Unknown → Accept/Reject` is always permitted.
//! - `Accept ↔ Reject` only under the origin rule above.
//! - Age entries exist only for nodes that received a committed insert.

use tracing::debug;

use crate::acceptance::{Acceptance, Origin};
use crate::age::{self, AgeIndex};
use crate::alphabet::Alphabet;
use crate::config::TreeConfig;
use crate::construction::{AdaptiveConstruction, Construction, UserInsertion};
use crate::error::CacheError;
use crate::node::NodeId;
use crate::tree::DfaTree;
use crate::view::{breadth_first, TreeView};
use crate::word::{Symbol, Word};

/// Tree-shaped cache whose committed values may be corrected.
#[derive(Clone, Debug)]
pub struct AdaptiveDfaTreeBuilder<I: Symbol> {
    tree: DfaTree<I, Origin>,
    ages: AgeIndex<I>,
}

impl<I: Symbol> AdaptiveDfaTreeBuilder<I> {
    /// Empty cache over `alphabet`.
    pub fn new(alphabet: Alphabet<I>) -> Self {
        Self::with_config(alphabet, TreeConfig::default())
    }

    /// Empty cache over `alphabet` with explicit configuration.
    pub fn with_config(alphabet: Alphabet<I>, config: TreeConfig) -> Self {
        Self {
            tree: DfaTree::new(alphabet, &config),
            ages: AgeIndex::new(),
        }
    }

    /// Commit `accept` for `word` as an [`Origin::Oracle`] observation.
    ///
    /// Returns `true` if a different committed value was overwritten.
    pub fn insert(&mut self, word: &Word<I>, accept: bool) -> Result<bool, CacheError<I>> {
        self.insert_with_origin(word, accept, Origin::Oracle)
    }

    /// Commit `accept` for `word` as an [`Origin::User`] assertion.
    ///
    /// Returns `true` if a different committed value was overwritten.
    pub fn insert_from_user(
        &mut self,
        word: &Word<I>,
        accept: bool,
    ) -> Result<bool, CacheError<I>> {
        self.insert_with_origin(word, accept, Origin::User)
    }

    /// Commit `accept` for `word` with an explicit origin.
    pub fn insert_with_origin(
        &mut self,
        word: &Word<I>,
        accept: bool,
        origin: Origin,
    ) -> Result<bool, CacheError<I>> {
        let id = self.tree.walk_or_create(word)?;
        let node = self.tree.node_mut(id);
        let existing = node.acceptance();
        let incoming = Acceptance::from_bool(accept);
        let stored_origin = *node.provenance();
        let mut overwritten = false;

        if existing == Acceptance::Unknown {
            node.set_acceptance(incoming);
            node.set_provenance(origin);
        } else if existing != incoming {
            if stored_origin.yields_to(origin) {
                node.set_acceptance(incoming);
                node.set_provenance(origin);
                overwritten = true;
                debug!(
                    len = word.len(),
                    %existing,
                    %incoming,
                    ?stored_origin,
                    ?origin,
                    "overwrote committed acceptance"
                );
            } else {
                debug!(len = word.len(), %existing, ?origin, "kept user-asserted acceptance");
            }
        }

        self.ages.touch(id, word.clone());
        Ok(overwritten)
    }

    /// Age-index entries from oldest to newest.
    pub fn ages(&self) -> age::Iter<'_, I> {
        self.ages.iter()
    }

    /// Origin of the value committed for `word`, if any.
    pub fn origin_of(&self, word: &Word<I>) -> Option<Origin> {
        let node = self.tree.node(self.tree.node_of(word)?)?;
        node.acceptance().is_known().then(|| *node.provenance())
    }

    /// Node reached by `word`, without creating anything.
    pub fn node_of(&self, word: &Word<I>) -> Option<NodeId> {
        self.tree.node_of(word)
    }

    /// Remove every node reachable from `node` (itself included) from the age index.
    ///
    /// Returns the number of entries removed. Tree contents are untouched.
    pub fn retire_subtree(&mut self, node: NodeId) -> usize {
        if self.tree.node(node).is_none() {
            return 0;
        }
        let view = TreeView::new(&self.tree);
        let mut removed = 0;
        for id in breadth_first(&view, [node]) {
            if self.ages.remove(id).is_some() {
                removed += 1;
            }
        }
        removed
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

impl<I: Symbol> Construction<I> for AdaptiveDfaTreeBuilder<I> {
    type Provenance = Origin;

    fn tree(&self) -> &DfaTree<I, Origin> {
        &self.tree
    }

    fn add_alphabet_symbol(&mut self, sym: I) -> bool {
        self.tree.add_alphabet_symbol(sym)
    }
}

impl<I: Symbol> AdaptiveConstruction<I> for AdaptiveDfaTreeBuilder<I> {
    fn insert(&mut self, word: &Word<I>, accept: bool) -> Result<bool, CacheError<I>> {
        self.insert_with_origin(word, accept, Origin::Oracle)
    }

    fn oldest_input(&self) -> Option<&Word<I>> {
        self.ages.oldest()
    }

    fn user_insertion(&mut self) -> Option<&mut dyn UserInsertion<I>> {
        Some(self)
    }
}

impl<I: Symbol> UserInsertion<I> for AdaptiveDfaTreeBuilder<I> {
    fn insert_from_user(&mut self, word: &Word<I>, accept: bool) -> Result<bool, CacheError<I>> {
        self.insert_with_origin(word, accept, Origin::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word<char> {
        Word::from_chars(s)
    }

    fn cache() -> AdaptiveDfaTreeBuilder<char> {
        AdaptiveDfaTreeBuilder::new(Alphabet::characters('a', 'b'))
    }

    #[test]
    fn test_fresh_insert_reports_no_overwrite() {
        let mut c = cache();
        assert_eq!(c.insert(&w("a"), false), Ok(false));
        assert_eq!(c.lookup(&w("a")), (true, Some(false)));
        assert_eq!(c.origin_of(&w("a")), Some(Origin::Oracle));
    }

    #[test]
    fn test_equal_insert_keeps_origin() {
        let mut c = cache();
        c.insert_from_user(&w("a"), true).unwrap();
        assert_eq!(c.insert(&w("a"), true), Ok(false));
        assert_eq!(c.origin_of(&w("a")), Some(Origin::User));
    }

    #[test]
    fn test_user_overrides_oracle() {
        let mut c = cache();
        c.insert(&w("b"), true).unwrap();
        assert_eq!(c.insert_from_user(&w("b"), false), Ok(true));
        assert_eq!(c.lookup(&w("b")), (true, Some(false)));
        assert_eq!(c.origin_of(&w("b")), Some(Origin::User));
    }

    #[test]
    fn test_intermediate_nodes_have_no_origin_or_age() {
        let mut c = cache();
        c.insert(&w("aba"), true).unwrap();
        assert_eq!(c.origin_of(&w("ab")), None);
        assert_eq!(c.ages().count(), 1);
        let ab = c.node_of(&w("ab")).unwrap();
        assert!(c.ages().all(|(id, _)| id != ab));
    }

    #[test]
    fn test_refused_overwrite_still_refreshes_age() {
        let mut c = cache();
        c.insert_from_user(&w("a"), true).unwrap();
        c.insert(&w("b"), true).unwrap();
        assert_eq!(c.oldest_input(), Some(&w("a")));
        assert_eq!(c.insert(&w("a"), false), Ok(false));
        assert_eq!(c.oldest_input(), Some(&w("b")));
    }

    #[test]
    fn test_retire_subtree() {
        let mut c = cache();
        for s in ["", "a", "ab", "aba", "b"] {
            c.insert(&w(s), true).unwrap();
        }
        let a = c.node_of(&w("a")).unwrap();
        assert_eq!(c.retire_subtree(a), 3);
        let remaining: Vec<Word<char>> = c.ages().map(|(_, word)| word.clone()).collect();
        assert_eq!(remaining, vec![w(""), w("b")]);
        // the tree itself keeps its contents
        assert_eq!(c.lookup(&w("aba")), (true, Some(true)));
        // retiring again finds nothing
        assert_eq!(c.retire_subtree(a), 0);
    }
}
