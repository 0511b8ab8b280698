//! Arena-backed, alphabet-indexed prefix tree shared by all builders.
//!
//! [`DfaTree`] owns the input alphabet and every node. Builders extend it
//! through [`DfaTree::walk_or_create`] and read it through lookup, the graph
//! views, and the separating-word search.
//!
//! # Invariants
//! - Acyclic; every node except the root has exactly one incoming edge.
//! - Every node's child storage is at least [`DfaTree::alphabet_size`] wide
//!   before any index from a newly added symbol is used.
//! - Nodes are never removed.

use alloc::vec::Vec;
use tracing::trace;

use crate::acceptance::Acceptance;
use crate::alphabet::Alphabet;
use crate::automaton::Dfa;
use crate::config::TreeConfig;
use crate::error::CacheError;
use crate::node::{Node, NodeId};
use crate::search;
use crate::view::{BoolTreeView, TreeView};
use crate::word::{Symbol, Word};

/// The cache tree: root plus lazily created descendants.
#[derive(Clone, Debug)]
pub struct DfaTree<I: Symbol, P> {
    nodes: Vec<Node<P>>,
    alphabet: Alphabet<I>,
    alphabet_size: usize,
}

impl<I: Symbol, P: Default> DfaTree<I, P> {
    /// A tree holding only an `Unknown` root.
    pub fn new(alphabet: Alphabet<I>, config: &TreeConfig) -> Self {
        let alphabet_size = alphabet.size();
        let mut nodes = Vec::with_capacity(config.node_capacity.max(1));
        nodes.push(Node::new(alphabet_size));
        Self {
            nodes,
            alphabet,
            alphabet_size,
        }
    }

    /// Node reached by `word`, creating an `Unknown` node for every missing step.
    ///
    /// All symbols are resolved before anything is created, so an unknown
    /// symbol leaves the tree untouched.
    pub(crate) fn walk_or_create(&mut self, word: &Word<I>) -> Result<NodeId, CacheError<I>> {
        let mut indices = Vec::with_capacity(word.len());
        for sym in word {
            let idx = self
                .alphabet
                .index_of(sym)
                .ok_or_else(|| CacheError::UnknownSymbol { symbol: sym.clone() })?;
            indices.push(idx);
        }

        let mut curr = NodeId::ROOT;
        for idx in indices {
            curr = match self.nodes[curr.index()].child(idx) {
                Some(succ) => succ,
                None => {
                    let succ = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::new(self.alphabet_size));
                    self.nodes[curr.index()].set_child(idx, self.alphabet_size, succ);
                    trace!(parent = curr.0, child = succ.0, symbol_index = idx, "created node");
                    succ
                }
            };
        }
        Ok(curr)
    }

    /// Register `sym` and widen every node if the alphabet grew.
    ///
    /// Returns `true` if the alphabet grew. Adding a present symbol is a no-op.
    pub fn add_alphabet_symbol(&mut self, sym: I) -> bool {
        if !self.alphabet.contains(&sym) {
            self.alphabet.add_symbol(sym);
        }
        let new_size = self.alphabet.size();
        if self.alphabet_size >= new_size {
            return false;
        }
        let widened = self.ensure_input_capacity(self.alphabet_size, new_size);
        trace!(old_size = self.alphabet_size, new_size, widened, "widened tree for new symbol");
        self.alphabet_size = new_size;
        true
    }

    /// Iterative widening from the root. Only indices below `old_size` can hold children.
    fn ensure_input_capacity(&mut self, old_size: usize, new_size: usize) -> usize {
        let mut worklist = alloc::vec![NodeId::ROOT];
        let mut widened = 0;
        while let Some(id) = worklist.pop() {
            let node = &mut self.nodes[id.index()];
            node.ensure_capacity(new_size);
            widened += 1;
            for idx in 0..old_size {
                if let Some(child) = node.child(idx) {
                    worklist.push(child);
                }
            }
        }
        widened
    }
}

impl<I: Symbol, P> DfaTree<I, P> {
    /// The root node (empty word).
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Node by id, or `None` for an id this tree never handed out.
    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id.index())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<P> {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn acceptance_of(&self, id: NodeId) -> Acceptance {
        self.nodes
            .get(id.index())
            .map_or(Acceptance::Unknown, Node::acceptance)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &Alphabet<I> {
        &self.alphabet
    }

    /// Alphabet size every node is currently widened to.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Dense index of `sym`, if it is part of the alphabet.
    pub fn input_index(&self, sym: &I) -> Option<usize> {
        self.alphabet.index_of(sym)
    }

    /// Child of `id` along `sym`, without creating anything.
    pub fn successor(&self, id: NodeId, sym: &I) -> Option<NodeId> {
        let idx = self.alphabet.index_of(sym)?;
        self.nodes.get(id.index())?.child(idx)
    }

    /// Node reached by `word`, or `None` if the path leaves the tree.
    pub fn node_of(&self, word: &Word<I>) -> Option<NodeId> {
        word.iter()
            .try_fold(NodeId::ROOT, |curr, sym| self.successor(curr, sym))
    }

    /// `(definitive, acceptance)` for `word`.
    ///
    /// A missing edge or an `Unknown` terminal node yields `(false, None)`.
    pub fn lookup(&self, word: &Word<I>) -> (bool, Option<bool>) {
        let out = self
            .node_of(word)
            .and_then(|id| self.acceptance_of(id).committed());
        (out.is_some(), out)
    }

    /// Graph / transition-system view with `Acceptance` state properties.
    pub fn as_graph(&self) -> TreeView<'_, I, P> {
        TreeView::new(self)
    }

    /// Transition-system view with `Acceptance` state properties.
    pub fn as_transition_system(&self) -> TreeView<'_, I, P> {
        TreeView::new(self)
    }

    /// Transition-system view projecting acceptance to `bool`; also a [`Dfa`].
    pub fn as_bool_transition_system(&self) -> BoolTreeView<'_, I, P> {
        BoolTreeView::new(self)
    }

    /// A word on which `target` disagrees with the committed knowledge, if any.
    pub fn find_separating_word<D: Dfa<I>>(
        &self,
        target: &D,
        inputs: &[I],
        omit_undefined: bool,
    ) -> Option<Word<I>> {
        search::find_separating_word(self, target, inputs, omit_undefined)
    }
}
