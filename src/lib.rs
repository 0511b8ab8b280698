//! # accept-cache
//!
//! Incremental and adaptive acceptance caches for deterministic automata.
//!
//! Active automata learning asks the same membership questions over and over.
//! A cache stores every answered `(word, accept)` observation in a prefix tree
//! so that repeated queries are answered locally, and so that a candidate
//! hypothesis can be checked against everything observed so far.
//!
//! ---
//!
//! ## Two builders
//!
//! **[`IncrementalDfaTreeBuilder`]** assumes a consistent observation source.
//! A committed classification never changes; a contradicting insert fails
//! with a [`ConflictError`] and the cache is left as it was.
//!
//! **[`AdaptiveDfaTreeBuilder`]** assumes the source can be wrong or can drift.
//! A contradicting insert overwrites the stored value, subject to a
//! provenance rule: a fact asserted by a [`Origin::User`] can only be
//! corrected by another user assertion. The builder also tracks which fact
//! has gone longest without being re-observed
//! ([`AdaptiveConstruction::oldest_input`]), so stale entries can be
//! re-queried first.
//!
//! Both answer [`lookup`](construction::Construction::lookup) with
//! `(definitive, acceptance)` and can search for a
//! [separating word](search::find_separating_word) against any [`Dfa`].
//!
//! ## The pipeline
//!
//! ```text
//! observations ──insert──▶ builder ──▶ DfaTree (arena of Node<P>)
//!                                         │
//!                      ┌──────────────────┼──────────────────┐
//!                      ▼                  ▼                  ▼
//!                   lookup         TreeView / Graph   find_separating_word ◀── target: Dfa
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`word`] | [`Word`], [`Symbol`] | Immutable input words |
//! | [`alphabet`] | [`Alphabet`] | Dense, growable symbol indices |
//! | [`acceptance`] | [`Acceptance`], [`Origin`] | Tri-state classification and provenance |
//! | [`node`] | [`Node`], [`NodeId`] | Alphabet-indexed tree nodes |
//! | [`tree`] | [`DfaTree`] | Arena-backed tree, lookup, alphabet growth |
//! | [`view`] | [`TreeView`], [`BoolTreeView`] | Graph / transition-system views |
//! | [`automaton`] | [`Dfa`], [`CompactDfa`] | Target automaton capability set |
//! | [`search`] | [`find_separating_word`] | Explicit-stack divergence search |
//! | [`construction`] | [`Construction`] and friends | Builder capabilities as traits |
//! | [`strict`] | [`IncrementalDfaTreeBuilder`] | Insert-or-conflict |
//! | [`adaptive`] | [`AdaptiveDfaTreeBuilder`] | Insert-or-overwrite with age tracking |
//! | [`age`] | [`AgeIndex`] | O(1) refresh-ordered node → word index |
//!
//! ## Example
//!
//! ```rust
//! use accept_cache::{AdaptiveDfaTreeBuilder, Alphabet, CompactDfa, Construction, Word};
//!
//! let mut cache = AdaptiveDfaTreeBuilder::new(Alphabet::characters('a', 'b'));
//! cache.insert(&Word::from_chars("a"), true).unwrap();
//! cache.insert(&Word::from_chars("b"), false).unwrap();
//!
//! // hypothesis: accepts nothing
//! let mut hyp = CompactDfa::new();
//! let q = hyp.add_initial_state(false);
//! hyp.add_transition(q, 'a', q);
//! hyp.add_transition(q, 'b', q);
//!
//! let cex = cache.find_separating_word(&hyp, &['a', 'b'], false);
//! assert_eq!(cex, Some(Word::from_chars("a")));
//! ```
//!
//! ## `no_std`
//!
//! The crate builds without `std` (disable default features); it needs
//! `alloc`. Enable the `serde` feature for value-type serialisation.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]; install a subscriber to see
//! them. Conflicts and overwrites log at `debug`, node creation and alphabet
//! widening at `trace`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod acceptance;
pub mod adaptive;
pub mod age;
pub mod alphabet;
pub mod automaton;
pub mod config;
pub mod construction;
pub mod error;
pub mod node;
pub mod search;
pub mod strict;
pub mod tree;
pub mod view;
pub mod word;

pub use acceptance::{Acceptance, Origin};
pub use adaptive::AdaptiveDfaTreeBuilder;
pub use age::AgeIndex;
pub use alphabet::Alphabet;
pub use automaton::{CompactDfa, Dfa};
pub use config::TreeConfig;
pub use construction::{
    insert_from_user, AdaptiveConstruction, Construction, IncrementalConstruction, UserInsertion,
};
pub use error::{CacheError, ConflictError};
pub use node::{Node, NodeId};
pub use search::find_separating_word;
pub use strict::IncrementalDfaTreeBuilder;
pub use tree::DfaTree;
pub use view::{BoolTreeView, Graph, TransitionSystem, TreeView};
pub use word::{Symbol, Word};
