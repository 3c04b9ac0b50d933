//! Property tests cross-checking the automaton against brute force.
//!
//! Brute force builds the literal set of substrings with nested loops; the
//! automaton must agree on membership, counts, and k-th retrieval for every
//! text in the corpus.

use sax::automaton::{ROOT, SuffixAutomaton};
use std::collections::BTreeSet;

/// Texts exercising repeats, periodicity, and distinct-byte extremes
const CORPUS: &[&[u8]] = &[
    b"abcbc",
    b"aaa",
    b"banana",
    b"mississippi",
    b"abababab",
    b"abcdefgh",
    b"aabbaabb",
    b"zyxzyxzyx",
    b"a",
    b"ab",
];

/// All distinct non-empty substrings, sorted lexicographically
fn brute_force_substrings(text: &[u8]) -> BTreeSet<Vec<u8>> {
    let mut set = BTreeSet::new();
    for i in 0..text.len() {
        for j in i + 1..=text.len() {
            set.insert(text[i..j].to_vec());
        }
    }
    set
}

/// Deterministic low-quality random bytes over a 4-symbol alphabet
fn pseudo_random_text(len: usize, mut seed: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            b'a' + ((seed >> 33) % 4) as u8
        })
        .collect()
}

#[test]
fn substring_completeness() {
    for &text in CORPUS {
        let sa = SuffixAutomaton::from_bytes(text);
        let expected = brute_force_substrings(text);

        for w in &expected {
            assert!(sa.contains(w), "{:?} missing from automaton of {:?}", w, text);
        }

        // Mutated substrings that left the set must be rejected
        for w in &expected {
            let mut bad = w.clone();
            bad.push(b'!');
            assert!(!sa.contains(&bad));
        }
        assert!(!sa.contains(b"qq"));
    }
}

#[test]
fn count_matches_brute_force() {
    for &text in CORPUS {
        let sa = SuffixAutomaton::from_bytes(text);
        let expected = brute_force_substrings(text).len() as u64;
        assert_eq!(
            sa.distinct_substrings().unwrap(),
            expected,
            "count mismatch for {:?}",
            text
        );
    }
}

#[test]
fn count_matches_brute_force_random() {
    for seed in 0..8 {
        let text = pseudo_random_text(64, seed);
        let sa = SuffixAutomaton::from_bytes(&text);
        let expected = brute_force_substrings(&text).len() as u64;
        assert_eq!(sa.distinct_substrings().unwrap(), expected);
    }
}

#[test]
fn kth_enumerates_sorted_substrings() {
    for &text in CORPUS {
        let sa = SuffixAutomaton::from_bytes(text);
        let expected: Vec<Vec<u8>> = brute_force_substrings(text).into_iter().collect();

        for (i, w) in expected.iter().enumerate() {
            let got = sa.kth_substring(i as u64 + 1).unwrap();
            assert_eq!(&got, w, "rank {} of {:?}", i + 1, text);
        }
        assert!(sa.kth_substring(expected.len() as u64 + 1).is_err());
    }
}

#[test]
fn kth_results_strictly_increase() {
    let sa = SuffixAutomaton::from_bytes(b"mississippi");
    let total = sa.distinct_substrings().unwrap();
    let mut prev = sa.kth_substring(1).unwrap();
    for k in 2..=total {
        let cur = sa.kth_substring(k).unwrap();
        assert!(prev < cur, "rank {} not strictly above rank {}", k, k - 1);
        prev = cur;
    }
}

#[test]
fn state_count_bound() {
    for &text in CORPUS {
        if text.len() < 2 {
            continue;
        }
        let sa = SuffixAutomaton::from_bytes(text);
        assert!(sa.state_count() <= 2 * text.len() - 1);
    }
    let text = pseudo_random_text(512, 7);
    let sa = SuffixAutomaton::from_bytes(&text);
    assert!(sa.state_count() <= 2 * text.len() - 1);
}

#[test]
fn structural_invariants() {
    for &text in CORPUS {
        let sa = SuffixAutomaton::from_bytes(text);
        let states = sa.states();

        for (id, state) in states.iter().enumerate() {
            // Transitions point to strictly longer states
            for &target in state.next.values() {
                assert!(states[target].len > state.len);
            }

            // Suffix links strictly shorten and reach the root
            if id == ROOT {
                assert!(state.link.is_none());
                assert_eq!(state.len, 0);
            } else {
                let mut cur = id;
                let mut hops = 0;
                while let Some(link) = states[cur].link {
                    assert!(states[link].len < states[cur].len);
                    cur = link;
                    hops += 1;
                    assert!(hops <= states.len());
                }
                assert_eq!(cur, ROOT);
            }
        }
    }
}

#[test]
fn incremental_equals_batch() {
    for &text in CORPUS {
        let batch = SuffixAutomaton::from_bytes(text);

        let mut incremental = SuffixAutomaton::new();
        for &b in text {
            incremental.append(b);
        }
        incremental.finalize();

        assert_eq!(
            batch.count_by_state().unwrap(),
            incremental.count_by_state().unwrap(),
            "incremental build diverged for {:?}",
            text
        );
        assert_eq!(batch.state_count(), incremental.state_count());
    }
}

#[test]
fn abcbc_scenario() {
    let sa = SuffixAutomaton::from_bytes(b"abcbc");
    let expected: BTreeSet<Vec<u8>> = [
        "a", "b", "c", "ab", "bc", "cb", "abc", "bcb", "cbc", "abcb", "bcbc", "abcbc",
    ]
    .iter()
    .map(|s| s.as_bytes().to_vec())
    .collect();

    assert_eq!(brute_force_substrings(b"abcbc"), expected);
    assert_eq!(sa.distinct_substrings().unwrap(), 12);
    assert_eq!(sa.kth_substring(1).unwrap(), b"a");
    assert_eq!(
        sa.kth_substring(12).unwrap(),
        expected.iter().max().unwrap().clone()
    );
}

#[test]
fn empty_text_has_no_substrings() {
    let sa = SuffixAutomaton::new();
    assert_eq!(sa.distinct_substrings().unwrap(), 0);
    assert!(sa.contains(b""));
    assert!(!sa.contains(b"a"));
}

#[test]
fn growing_text_after_finalize() {
    let mut sa = SuffixAutomaton::from_bytes(b"abc");
    assert_eq!(sa.distinct_substrings().unwrap(), 6);

    // Appending invalidates the finalized view until rebuilt
    sa.append(b'b');
    sa.append(b'c');
    assert!(sa.count_by_state().is_err());

    sa.finalize();
    assert_eq!(sa.distinct_substrings().unwrap(), 12);
    assert_eq!(
        sa.distinct_substrings().unwrap(),
        SuffixAutomaton::from_bytes(b"abcbc")
            .distinct_substrings()
            .unwrap()
    );
}
