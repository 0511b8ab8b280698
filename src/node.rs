//! Alphabet-indexed tree nodes.
//!
//! Nodes live in an arena owned by [`DfaTree`](crate::tree::DfaTree) and are
//! addressed by [`NodeId`]. Each node stores one optional child per alphabet
//! index, its [`Acceptance`], and a provenance payload `P` (`()` when the
//! builder does not track provenance, [`Origin`](crate::acceptance::Origin)
//! when it does).
//!
//! # Invariants
//! - Child storage only grows; widening never truncates.
//! - `set_child` widens first, so any index below the current alphabet size is addressable.

use alloc::vec::Vec;

use crate::acceptance::Acceptance;

/// Arena identifier of a tree node. Assigned at creation, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root node, which addresses the empty word.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of this node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One tree node.
#[derive(Clone, Debug)]
pub struct Node<P> {
    children: Vec<Option<NodeId>>,
    acceptance: Acceptance,
    provenance: P,
}

impl<P: Default> Node<P> {
    /// An `Unknown` node with room for `alphabet_size` children.
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            children: alloc::vec![None; alphabet_size],
            acceptance: Acceptance::Unknown,
            provenance: P::default(),
        }
    }
}

impl<P> Node<P> {
    /// Child at `idx`, or `None` if absent or beyond the current storage.
    pub fn child(&self, idx: usize) -> Option<NodeId> {
        self.children.get(idx).copied().flatten()
    }

    /// Set the child at `idx`, widening storage to `alphabet_size` first.
    pub fn set_child(&mut self, idx: usize, alphabet_size: usize, child: NodeId) {
        self.ensure_capacity(alphabet_size.max(idx + 1));
        self.children[idx] = Some(child);
    }

    /// Widen child storage to at least `alphabet_size` slots. Existing entries are kept.
    pub fn ensure_capacity(&mut self, alphabet_size: usize) {
        if self.children.len() < alphabet_size {
            self.children.resize(alphabet_size, None);
        }
    }

    /// Current child storage length.
    pub fn capacity(&self) -> usize {
        self.children.len()
    }

    /// Present children with their alphabet index, in index order.
    pub fn children(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(idx, c)| c.map(|id| (idx, id)))
    }

    /// Stored acceptance.
    pub fn acceptance(&self) -> Acceptance {
        self.acceptance
    }

    /// Replace the stored acceptance.
    pub fn set_acceptance(&mut self, acceptance: Acceptance) {
        self.acceptance = acceptance;
    }

    /// Stored provenance payload.
    pub fn provenance(&self) -> &P {
        &self.provenance
    }

    /// Replace the provenance payload.
    pub fn set_provenance(&mut self, provenance: P) {
        self.provenance = provenance;
    }
}
