//! Integration tests for the insert-or-overwrite builder.
//!
//! Covers the provenance policy, confluence, lookup progression and the age
//! index.

use accept_cache::{
    insert_from_user, AdaptiveConstruction, AdaptiveDfaTreeBuilder, Alphabet, Construction,
    Origin, Word,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn w(s: &str) -> Word<char> {
    Word::from_chars(s)
}

fn cache_ab() -> AdaptiveDfaTreeBuilder<char> {
    AdaptiveDfaTreeBuilder::new(Alphabet::characters('a', 'b'))
}

// ─── confluence ──────────────────────────────────────────────────────────────

/// Sharing the root between "a", "b" and "" must not make "aa" look known.
#[test]
fn test_confluence_regression() {
    let mut cache = cache_ab();
    cache.insert(&w("a"), true).unwrap();
    cache.insert(&w("b"), true).unwrap();
    cache.insert(&w(""), true).unwrap();
    assert_eq!(cache.lookup(&w("aa")), (false, None));
}

// ─── lookup progression ──────────────────────────────────────────────────────

#[test]
fn test_lookup_progression() {
    let mut cache = cache_ab();
    let (w1, w2, w3) = (w("a"), w("b"), w(""));
    for word in [&w1, &w2, &w3] {
        assert!(!cache.has_definitive_information(word));
    }

    assert_eq!(cache.insert(&w1, false), Ok(false));
    assert!(cache.has_definitive_information(&w1));
    assert!(!cache.has_definitive_information(&w1.append('a')));
    assert_eq!(cache.lookup(&w1), (true, Some(false)));

    assert_eq!(cache.insert(&w2, true), Ok(false));
    assert!(cache.has_definitive_information(&w2));
    assert!(!cache.has_definitive_information(&w3));
    assert_eq!(cache.lookup(&w2), (true, Some(true)));

    assert_eq!(cache.insert(&w1, true), Ok(true));
    assert_eq!(cache.lookup(&w1), (true, Some(true)));
    assert!(!cache.has_definitive_information(&w3));

    // inserting the same again is fine
    assert_eq!(cache.insert(&w1, true), Ok(false));
}

// ─── provenance policy ───────────────────────────────────────────────────────

#[test]
fn test_oracle_overrides_oracle() {
    for first in [true, false] {
        let mut cache = cache_ab();
        let word = w("abba");
        cache.insert(&word, first).unwrap();
        assert_eq!(cache.insert(&word, !first), Ok(true));
        assert_eq!(cache.lookup(&word), (true, Some(!first)));
    }
}

#[test]
fn test_oracle_cannot_override_user() {
    let mut cache = cache_ab();
    let word = w("ba");
    cache.insert_from_user(&word, true).unwrap();
    assert_eq!(cache.insert(&word, false), Ok(false));
    assert_eq!(cache.lookup(&word), (true, Some(true)));
    assert_eq!(cache.origin_of(&word), Some(Origin::User));
}

#[test]
fn test_user_overrides_user() {
    let mut cache = cache_ab();
    let word = w("ba");
    cache.insert_from_user(&word, true).unwrap();
    assert_eq!(cache.insert_from_user(&word, false), Ok(true));
    assert_eq!(cache.lookup(&word), (true, Some(false)));
}

#[test]
fn test_user_overrides_oracle_then_sticks() {
    let mut cache = cache_ab();
    let word = w("a");
    cache.insert(&word, false).unwrap();
    assert_eq!(insert_from_user(&mut cache, &word, true), Ok(true));
    assert_eq!(cache.insert(&word, false), Ok(false));
    assert_eq!(cache.direct_lookup(&word), Some(true));
}

// ─── ages ────────────────────────────────────────────────────────────────────

#[test]
fn test_ages() {
    let mut cache = cache_ab();
    let (w1, w2, w3) = (w("a"), w("b"), w(""));
    cache.insert(&w1, true).unwrap();
    cache.insert(&w2, false).unwrap();
    cache.insert(&w3, false).unwrap();
    assert_eq!(cache.oldest_input(), Some(&w1));

    cache.insert(&w1, false).unwrap();
    assert_eq!(cache.oldest_input(), Some(&w2));

    let order: Vec<Word<char>> = cache.ages().map(|(_, word)| word.clone()).collect();
    assert_eq!(order, vec![w2, w3, w1]);
}

#[test]
fn test_empty_cache() {
    let cache = cache_ab();
    assert_eq!(cache.lookup(&w("a")).1, None);
    assert_eq!(AdaptiveConstruction::oldest_input(&cache), None);
}

#[test]
fn test_unknown_symbol_is_reported_without_side_effects() {
    let mut cache = cache_ab();
    assert!(cache.insert(&w("az"), true).is_err());
    assert_eq!(cache.oldest_input(), None);
    assert_eq!(cache.tree().node_count(), 1);

    cache.add_alphabet_symbol('z');
    assert_eq!(cache.insert(&w("az"), true), Ok(false));
    assert_eq!(cache.oldest_input(), Some(&w("az")));
}

#[test]
fn test_retire_root_clears_all_ages() {
    let mut cache = cache_ab();
    for s in ["a", "ab", "b", "bb", ""] {
        cache.insert(&w(s), true).unwrap();
    }
    let root = cache.tree().root();
    assert_eq!(cache.retire_subtree(root), 5);
    assert_eq!(cache.oldest_input(), None);
    // lookups are unaffected
    assert_eq!(cache.lookup(&w("bb")), (true, Some(true)));
}
