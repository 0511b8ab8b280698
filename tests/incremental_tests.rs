//! Integration tests for the insert-or-conflict builder.
//!
//! Covers idempotence, the conflict law, alphabet growth, and the generic
//! `IncrementalConstruction` surface.

use accept_cache::{
    Acceptance, Alphabet, CacheError, ConflictError, Construction, IncrementalConstruction,
    IncrementalDfaTreeBuilder, TransitionSystem, Word,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn w(s: &str) -> Word<char> {
    Word::from_chars(s)
}

fn cache_ab() -> IncrementalDfaTreeBuilder<char> {
    IncrementalDfaTreeBuilder::new(Alphabet::characters('a', 'b'))
}

/// Prefix-closed trace set: every prefix of an accepted word is accepted.
fn prefix_closed_traces() -> Vec<(Word<char>, bool)> {
    vec![
        (w(""), true),
        (w("a"), true),
        (w("ab"), true),
        (w("abb"), false),
        (w("b"), false),
        (w("aa"), true),
        (w("aab"), true),
    ]
}

// ─── idempotence ─────────────────────────────────────────────────────────────

#[test]
fn test_repeat_insert_is_silent() {
    let mut cache = cache_ab();
    for (word, acc) in prefix_closed_traces() {
        cache.insert(&word, acc).unwrap();
    }
    let nodes = cache.tree().node_count();
    for (word, acc) in prefix_closed_traces() {
        cache.insert(&word, acc).expect("repeat insert must not conflict");
    }
    assert_eq!(cache.tree().node_count(), nodes);
    for (word, acc) in prefix_closed_traces() {
        assert_eq!(cache.lookup(&word), (true, Some(acc)), "word {:?}", word);
    }
}

// ─── conflict law ────────────────────────────────────────────────────────────

#[test]
fn test_conflict_leaves_first_value() {
    for first in [true, false] {
        let mut cache = cache_ab();
        let word = w("bab");
        cache.insert(&word, first).unwrap();

        match cache.insert(&word, !first) {
            Err(CacheError::Conflict(ConflictError { word: cw, existing, attempted })) => {
                assert_eq!(cw, word);
                assert_eq!(existing, Acceptance::from_bool(first));
                assert_eq!(attempted, Acceptance::from_bool(!first));
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(cache.lookup(&word), (true, Some(first)));
    }
}

#[test]
fn test_conflict_error_message_names_both_values() {
    let mut cache = cache_ab();
    cache.insert(&w("a"), true).unwrap();
    let err = cache.insert(&w("a"), false).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("accept"), "msg={}", msg);
    assert!(msg.contains("reject"), "msg={}", msg);
}

// ─── lookup ──────────────────────────────────────────────────────────────────

#[test]
fn test_prefix_closed_traces_lookup() {
    let mut cache = cache_ab();
    let traces = prefix_closed_traces();
    for (word, acc) in &traces {
        cache.insert(word, *acc).unwrap();
    }
    for (word, acc) in &traces {
        assert_eq!(cache.direct_lookup(word), Some(*acc));
        if *acc {
            for prefix in word.prefixes() {
                assert_eq!(cache.direct_lookup(&prefix), Some(true), "prefix {:?}", prefix);
            }
        }
    }
    assert!(!cache.has_definitive_information(&w("bb")));
}

#[test]
fn test_confluence_strict() {
    let mut cache = cache_ab();
    cache.insert(&w("a"), true).unwrap();
    cache.insert(&w("b"), true).unwrap();
    cache.insert(&w(""), true).unwrap();
    assert_eq!(cache.lookup(&w("aa")), (false, None));
}

// ─── alphabet growth ─────────────────────────────────────────────────────────

#[test]
fn test_alphabet_growth_preserves_lookups() {
    let mut cache = cache_ab();
    let traces = prefix_closed_traces();
    for (word, acc) in &traces {
        cache.insert(word, *acc).unwrap();
    }

    assert!(!cache.add_alphabet_symbol('a'), "present symbol is a no-op");
    assert!(cache.add_alphabet_symbol('c'));
    assert!(cache.add_alphabet_symbol('d'));

    for (word, acc) in &traces {
        assert_eq!(cache.lookup(word), (true, Some(*acc)));
    }
    cache.insert(&w("abcd"), true).unwrap();
    cache.insert(&w("dc"), false).unwrap();
    assert_eq!(cache.lookup(&w("abcd")), (true, Some(true)));
    assert_eq!(cache.lookup(&w("dc")), (true, Some(false)));
    assert_eq!(cache.input_alphabet().as_slice(), &['a', 'b', 'c', 'd']);
}

// ─── views ───────────────────────────────────────────────────────────────────

#[test]
fn test_transition_system_view_tracks_inserts() {
    let mut cache = cache_ab();
    cache.insert(&w("ab"), true).unwrap();
    {
        let ts = cache.as_transition_system();
        let root = ts.initial_state().unwrap();
        assert_eq!(ts.state_property(root), Acceptance::Unknown);
        assert_eq!(ts.successor(root, &'b'), None);
    }
    cache.insert(&w("b"), false).unwrap();
    let ts = cache.as_transition_system();
    let b = ts.successor(ts.initial_state().unwrap(), &'b').unwrap();
    assert_eq!(ts.state_property(b), Acceptance::Reject);
    assert_eq!(ts.states().len(), 4);
}

#[test]
fn test_generic_incremental_caller() {
    fn load<C: IncrementalConstruction<char>>(
        c: &mut C,
        words: &[&str],
    ) -> Result<(), CacheError<char>> {
        for s in words {
            c.insert_accepted(&Word::from_chars(s))?;
        }
        Ok(())
    }
    let mut cache = cache_ab();
    load(&mut cache, &["a", "ab", "abb"]).unwrap();
    assert_eq!(cache.direct_lookup(&w("abb")), Some(true));
    cache.insert(&w("b"), false).unwrap();
    assert!(load(&mut cache, &["b"]).unwrap_err().is_conflict());
}
