//! Queries over a finalized automaton
//!
//! Counting runs a single pass over the states in decreasing-length order:
//! transitions always point to strictly longer states, so every target's
//! count is ready before its source is processed. The k-th substring query
//! then descends from the root, spending its budget across transitions taken
//! in increasing symbol order.
//!
//! All counting-based queries refuse to run on an unfinalized automaton
//! rather than read a stale state order.

use super::builder::SuffixAutomaton;
use super::types::{AutomatonStats, ROOT};
use anyhow::Result;

impl SuffixAutomaton {
    /// Per-state distinct-substring counts, indexed by `StateId`
    ///
    /// `counts[s]` is the number of paths out of `s` (including the empty
    /// path), i.e. one more than the number of distinct non-empty substrings
    /// spelled by paths leaving `s`. `counts[ROOT] - 1` is the total number
    /// of distinct non-empty substrings of the text.
    pub fn count_by_state(&self) -> Result<Vec<u64>> {
        if !self.is_finalized() {
            anyhow::bail!("automaton not finalized; call finalize() after append()");
        }

        let states = self.states();
        let mut counts = vec![0u64; states.len()];
        for &id in self.by_len_desc() {
            let mut c = 1u64;
            for &target in states[id].next.values() {
                c += counts[target];
            }
            counts[id] = c;
        }
        Ok(counts)
    }

    /// Number of distinct non-empty substrings of the text
    pub fn distinct_substrings(&self) -> Result<u64> {
        Ok(self.count_by_state()?[ROOT] - 1)
    }

    /// The lexicographically k-th (1-indexed) distinct non-empty substring
    ///
    /// `k == 0` or `k` beyond [`Self::distinct_substrings`] is an error;
    /// there is no truncated best-effort result.
    pub fn kth_substring(&self, k: u64) -> Result<Vec<u8>> {
        let counts = self.count_by_state()?;
        let total = counts[ROOT] - 1;
        if k == 0 || k > total {
            anyhow::bail!(
                "k = {} out of range: text has {} distinct substrings",
                k,
                total
            );
        }

        let mut out = Vec::new();
        let mut state = ROOT;
        let mut budget = k;
        'descend: while budget > 0 {
            // Increasing symbol order makes the descent lexicographic
            for (&symbol, &target) in &self.states()[state].next {
                if counts[target] >= budget {
                    out.push(symbol);
                    state = target;
                    budget -= 1;
                    continue 'descend;
                }
                budget -= counts[target];
            }
            // Unreachable: the range check above caps the budget by the
            // total path count from the root.
            debug_assert!(false, "descent ran out of transitions");
            break;
        }
        Ok(out)
    }

    /// Whether `pattern` is a substring of the text
    ///
    /// Walks transitions only, so this works on an unfinalized automaton
    /// too. The empty pattern is a substring of every text.
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let mut state = ROOT;
        for &b in pattern {
            match self.states()[state].next.get(&b) {
                Some(&target) => state = target,
                None => return false,
            }
        }
        true
    }

    /// Snapshot of automaton size and substring count
    pub fn stats(&self) -> Result<AutomatonStats> {
        Ok(AutomatonStats {
            text_len: self.text_len(),
            state_count: self.state_count(),
            clone_count: self.clone_count(),
            transition_count: self.states().iter().map(|s| s.next.len()).sum(),
            distinct_substrings: self.distinct_substrings()?,
        })
    }
}
