//! Separating-word search between a cache tree and a target [`Dfa`].
//!
//! Depth-first over the tree, driven by an explicit frame stack so that the
//! native call depth stays constant regardless of word length.
//!
//! # Semantics
//!
//! - Only existing tree edges are followed; a probe symbol without a child
//!   edge is skipped at that depth.
//! - At every reached child the target's classification is compared with the
//!   child's acceptance. `Unknown` never conflicts, but its subtree is still
//!   explored.
//! - An undefined target transition is either skipped (`omit_undefined`) or
//!   read as a rejecting step, compared once, and not descended past.
//! - The first conflict found in probe order is returned; it need not be the
//!   shortest one.

use alloc::vec::Vec;
use tracing::debug;

use crate::automaton::Dfa;
use crate::node::NodeId;
use crate::tree::DfaTree;
use crate::word::{Symbol, Word};

/// One level of the depth-first search.
struct Frame<S> {
    state: S,
    node: NodeId,
    /// Position in the probe list of the symbol that led here; `None` at the root.
    incoming: Option<usize>,
    /// Next probe position to try.
    next: usize,
}

/// Find a word on which `target` contradicts a committed value in `tree`.
///
/// `inputs` is the ordered set of probe symbols. Returns `None` if no
/// contradiction is reachable through them.
pub fn find_separating_word<I, P, D>(
    tree: &DfaTree<I, P>,
    target: &D,
    inputs: &[I],
    omit_undefined: bool,
) -> Option<Word<I>>
where
    I: Symbol,
    D: Dfa<I> + ?Sized,
{
    let Some(init) = target.initial_state() else {
        return if omit_undefined { None } else { Some(Word::epsilon()) };
    };

    let root = tree.root();
    if tree.acceptance_of(root).conflicts(target.is_accepting(&init)) {
        debug!(len = 0, "separating word found at root");
        return Some(Word::epsilon());
    }

    let mut stack: Vec<Frame<D::State>> = alloc::vec![Frame {
        state: init,
        node: root,
        incoming: None,
        next: 0,
    }];
    let mut explored: usize = 1;

    while let Some(frame) = stack.last_mut() {
        if frame.next >= inputs.len() {
            stack.pop();
            continue;
        }
        let pos = frame.next;
        frame.next += 1;

        let input = &inputs[pos];
        let Some(child) = tree.successor(frame.node, input) else {
            continue;
        };
        let child_acc = tree.acceptance_of(child);

        match target.transition(&frame.state, input) {
            None if omit_undefined => {}
            None => {
                if child_acc.conflicts(false) {
                    let word = path_word(&stack, inputs, pos);
                    debug!(
                        len = word.len(),
                        explored,
                        "separating word found at undefined transition"
                    );
                    return Some(word);
                }
            }
            Some(succ) => {
                if child_acc.conflicts(target.is_accepting(&succ)) {
                    let word = path_word(&stack, inputs, pos);
                    debug!(len = word.len(), explored, "separating word found");
                    return Some(word);
                }
                stack.push(Frame {
                    state: succ,
                    node: child,
                    incoming: Some(pos),
                    next: 0,
                });
                explored += 1;
            }
        }
    }

    None
}

/// Symbols along the stack from the root, followed by the probe at `last`.
fn path_word<I: Clone, S>(stack: &[Frame<S>], inputs: &[I], last: usize) -> Word<I> {
    stack
        .iter()
        .filter_map(|f| f.incoming)
        .chain(core::iter::once(last))
        .map(|pos| inputs[pos].clone())
        .collect()
}
