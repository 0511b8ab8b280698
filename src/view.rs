//! Read-only views exposing a [`DfaTree`] to generic algorithms.
//!
//! [`TreeView`] presents the tree as a deterministic transition system whose
//! state property is the node's [`Acceptance`] and whose transitions carry no
//! property, and as a [`Graph`] whose edges are labelled with input symbols.
//! [`BoolTreeView`] projects acceptance to `bool` and doubles as a [`Dfa`],
//! so one cache can serve as the target of another cache's separating-word
//! search.
//!
//! Views borrow the tree; they always reflect its current contents.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;

use crate::acceptance::Acceptance;
use crate::automaton::Dfa;
use crate::node::NodeId;
use crate::tree::DfaTree;
use crate::word::Symbol;

/// Deterministic transition system with a property per state.
pub trait TransitionSystem<I> {
    /// State handle.
    type State: Copy + Eq + Hash;
    /// Per-state property.
    type StateProperty;

    /// Initial state, if any.
    fn initial_state(&self) -> Option<Self::State>;

    /// Successor of `state` on `input`, if defined.
    fn successor(&self, state: Self::State, input: &I) -> Option<Self::State>;

    /// Property attached to `state`.
    fn state_property(&self, state: Self::State) -> Self::StateProperty;
}

/// Directed graph with labelled edges.
pub trait Graph {
    /// Node handle.
    type Node: Copy + Eq + Hash;
    /// Edge label.
    type EdgeLabel;

    /// Every node of the graph.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Outgoing edges of `node` as `(label, target)` pairs.
    fn outgoing(&self, node: Self::Node) -> Vec<(Self::EdgeLabel, Self::Node)>;
}

/// Breadth-first iterator over every node reachable from `starts`.
///
/// Each node is yielded once, starts included.
pub fn breadth_first<G: Graph>(
    graph: &G,
    starts: impl IntoIterator<Item = G::Node>,
) -> BreadthFirst<'_, G> {
    let mut queue = VecDeque::new();
    let mut seen = HashSet::new();
    for start in starts {
        if seen.insert(start) {
            queue.push_back(start);
        }
    }
    BreadthFirst { graph, queue, seen }
}

/// Iterator returned by [`breadth_first`].
pub struct BreadthFirst<'g, G: Graph> {
    graph: &'g G,
    queue: VecDeque<G::Node>,
    seen: HashSet<G::Node>,
}

impl<G: Graph> Iterator for BreadthFirst<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<G::Node> {
        let node = self.queue.pop_front()?;
        for (_, succ) in self.graph.outgoing(node) {
            if self.seen.insert(succ) {
                self.queue.push_back(succ);
            }
        }
        Some(node)
    }
}

// ─── Acceptance-valued view ─────────────────────────────────────────────────

/// Tree as a transition system / graph with `Acceptance` state properties.
pub struct TreeView<'a, I: Symbol, P> {
    tree: &'a DfaTree<I, P>,
}

impl<'a, I: Symbol, P> TreeView<'a, I, P> {
    /// View over `tree`.
    pub fn new(tree: &'a DfaTree<I, P>) -> Self {
        Self { tree }
    }

    /// All tree nodes, breadth-first from the root in alphabet order.
    pub fn states(&self) -> Vec<NodeId> {
        breadth_first(self, [self.tree.root()]).collect()
    }
}

impl<I: Symbol, P> Clone for TreeView<'_, I, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Symbol, P> Copy for TreeView<'_, I, P> {}

impl<I: Symbol, P> TransitionSystem<I> for TreeView<'_, I, P> {
    type State = NodeId;
    type StateProperty = Acceptance;

    fn initial_state(&self) -> Option<NodeId> {
        Some(self.tree.root())
    }

    fn successor(&self, state: NodeId, input: &I) -> Option<NodeId> {
        self.tree.successor(state, input)
    }

    fn state_property(&self, state: NodeId) -> Acceptance {
        self.tree.acceptance_of(state)
    }
}

impl<I: Symbol, P> Graph for TreeView<'_, I, P> {
    type Node = NodeId;
    type EdgeLabel = I;

    fn nodes(&self) -> Vec<NodeId> {
        self.states()
    }

    fn outgoing(&self, node: NodeId) -> Vec<(I, NodeId)> {
        let Some(n) = self.tree.node(node) else {
            return Vec::new();
        };
        n.children()
            .filter_map(|(idx, child)| {
                self.tree
                    .alphabet()
                    .symbol(idx)
                    .map(|sym| (sym.clone(), child))
            })
            .collect()
    }
}

// ─── Boolean view ───────────────────────────────────────────────────────────

/// Tree as a transition system with `bool` state properties (`Unknown` → `false`).
pub struct BoolTreeView<'a, I: Symbol, P> {
    tree: &'a DfaTree<I, P>,
}

impl<'a, I: Symbol, P> BoolTreeView<'a, I, P> {
    /// View over `tree`.
    pub fn new(tree: &'a DfaTree<I, P>) -> Self {
        Self { tree }
    }

    /// All tree nodes, breadth-first from the root in alphabet order.
    pub fn states(&self) -> Vec<NodeId> {
        TreeView::new(self.tree).states()
    }
}

impl<I: Symbol, P> TransitionSystem<I> for BoolTreeView<'_, I, P> {
    type State = NodeId;
    type StateProperty = bool;

    fn initial_state(&self) -> Option<NodeId> {
        Some(self.tree.root())
    }

    fn successor(&self, state: NodeId, input: &I) -> Option<NodeId> {
        self.tree.successor(state, input)
    }

    fn state_property(&self, state: NodeId) -> bool {
        self.tree.acceptance_of(state).to_bool()
    }
}

impl<I: Symbol, P> Dfa<I> for BoolTreeView<'_, I, P> {
    type State = NodeId;

    fn initial_state(&self) -> Option<NodeId> {
        Some(self.tree.root())
    }

    fn transition(&self, state: &NodeId, input: &I) -> Option<NodeId> {
        self.tree.successor(*state, input)
    }

    fn is_accepting(&self, state: &NodeId) -> bool {
        self.tree.acceptance_of(*state).to_bool()
    }
}
