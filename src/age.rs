//! Age index: which committed node was refreshed least recently.
//!
//! Maps [`NodeId`] → the word that last wrote to that node, threaded through
//! an intrusive doubly linked list in refresh order. `touch` moves an entry to
//! the newest end, `oldest` reads the other end; both are O(1).
//!
//! # Invariants
//! - Only nodes that received a committed insert are present.
//! - `oldest`/`newest` are `None` exactly when the index is empty.

use hashbrown::HashMap;

use crate::node::NodeId;
use crate::word::Word;

#[derive(Clone, Debug)]
struct Entry<I> {
    word: Word<I>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Refresh-ordered node → word map.
#[derive(Clone, Debug)]
pub struct AgeIndex<I> {
    entries: HashMap<NodeId, Entry<I>>,
    oldest: Option<NodeId>,
    newest: Option<NodeId>,
}

impl<I> AgeIndex<I> {
    /// An empty index.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            oldest: None,
            newest: None,
        }
    }

    /// Record that `word` just wrote to `node`, making it the newest entry.
    pub fn touch(&mut self, node: NodeId, word: Word<I>) {
        self.remove(node);
        let prev = self.newest;
        match prev.and_then(|p| self.entries.get_mut(&p)) {
            Some(tail) => tail.next = Some(node),
            None => self.oldest = Some(node),
        }
        self.entries.insert(node, Entry { word, prev, next: None });
        self.newest = Some(node);
    }

    /// Drop the entry for `node`, returning its word.
    pub fn remove(&mut self, node: NodeId) -> Option<Word<I>> {
        let entry = self.entries.remove(&node)?;
        match entry.prev.and_then(|p| self.entries.get_mut(&p)) {
            Some(prev) => prev.next = entry.next,
            None => self.oldest = entry.next,
        }
        match entry.next.and_then(|n| self.entries.get_mut(&n)) {
            Some(next) => next.prev = entry.prev,
            None => self.newest = entry.prev,
        }
        Some(entry.word)
    }

    /// Word of the least recently refreshed entry.
    pub fn oldest(&self) -> Option<&Word<I>> {
        self.oldest
            .and_then(|id| self.entries.get(&id))
            .map(|e| &e.word)
    }

    /// Node of the least recently refreshed entry.
    pub fn oldest_node(&self) -> Option<NodeId> {
        self.oldest
    }

    /// Word last recorded for `node`.
    pub fn word_of(&self, node: NodeId) -> Option<&Word<I>> {
        self.entries.get(&node).map(|e| &e.word)
    }

    /// `true` if `node` has an entry.
    pub fn contains(&self, node: NodeId) -> bool {
        self.entries.contains_key(&node)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been recorded (or everything was removed).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> Iter<'_, I> {
        Iter {
            index: self,
            cursor: self.oldest,
        }
    }
}

impl<I> Default for AgeIndex<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Oldest-to-newest iterator over an [`AgeIndex`].
pub struct Iter<'a, I> {
    index: &'a AgeIndex<I>,
    cursor: Option<NodeId>,
}

impl<'a, I> Iterator for Iter<'a, I> {
    type Item = (NodeId, &'a Word<I>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = self.index.entries.get(&id)?;
        self.cursor = entry.next;
        Some((id, &entry.word))
    }
}
