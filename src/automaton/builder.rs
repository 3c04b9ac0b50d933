//! Suffix automaton builder
//!
//! Builds the automaton online, one byte at a time:
//! 1. Each appended byte creates one new "active" state for the extended text
//! 2. A backward walk over suffix links installs the missing transitions
//! 3. A conflicting transition target is split by cloning its state
//!
//! Total states stay below `2n - 1` for a text of length `n`, and the
//! backward walks amortize to O(1) per appended byte. After a batch of
//! appends, [`SuffixAutomaton::finalize`] rebuilds the decreasing-length
//! state order that the query layer's counting pass depends on.

use super::types::{ROOT, State, StateId};

/// Online suffix automaton over a byte alphabet
///
/// Recognizes exactly the set of substrings of the text appended so far.
/// Build fully, then query: `append`/`extend` take `&mut self`, queries take
/// `&self` on the finalized automaton.
pub struct SuffixAutomaton {
    /// State arena; `states[ROOT]` is the initial state
    states: Vec<State>,
    /// State representing the whole text processed so far
    last: StateId,
    /// State ids sorted by decreasing `len`, rebuilt by `finalize`
    by_len_desc: Vec<StateId>,
    /// Whether `by_len_desc` reflects the current arena
    finalized: bool,
    /// Bytes appended so far
    text_len: usize,
    /// States created by splitting
    clone_count: usize,
}

impl SuffixAutomaton {
    /// Create the automaton for the empty text
    ///
    /// Already finalized: the one-state order is trivially valid.
    pub fn new() -> Self {
        Self {
            states: vec![State::default()],
            last: ROOT,
            by_len_desc: vec![ROOT],
            finalized: true,
            text_len: 0,
            clone_count: 0,
        }
    }

    /// Build and finalize the automaton for `text` in one call
    pub fn from_bytes(text: &[u8]) -> Self {
        let mut sa = Self::new();
        sa.extend(text);
        sa
    }

    /// Append every byte of `text`, then finalize
    pub fn extend(&mut self, text: &[u8]) {
        for &b in text {
            self.append(b);
        }
        self.finalize();
    }

    /// Extend the recognized language by one byte
    ///
    /// Leaves the automaton unfinalized; call [`Self::finalize`] (or use
    /// [`Self::extend`]) before querying.
    pub fn append(&mut self, symbol: u8) {
        self.finalized = false;
        self.text_len += 1;

        let cur = self.alloc(State {
            len: self.states[self.last].len + 1,
            ..State::default()
        });

        // Walk back over suffix links, installing the new transition until a
        // state already has one on this symbol (or we fall off the root).
        let mut p = Some(self.last);
        while let Some(pid) = p {
            if self.states[pid].next.contains_key(&symbol) {
                break;
            }
            self.states[pid].next.insert(symbol, cur);
            p = self.states[pid].link;
        }

        match p {
            None => {
                self.states[cur].link = Some(ROOT);
            }
            Some(pid) => {
                let q = self.states[pid].next[&symbol];
                if self.states[q].len == self.states[pid].len + 1 {
                    // q already represents exactly the extended suffix class
                    self.states[cur].link = Some(q);
                } else {
                    // Split: clone q at the shorter length, retarget the
                    // suffix-link chain's transitions from q to the clone.
                    let clone = self.alloc(State {
                        len: self.states[pid].len + 1,
                        link: self.states[q].link,
                        next: self.states[q].next.clone(),
                    });
                    self.clone_count += 1;

                    let mut w = Some(pid);
                    while let Some(wid) = w {
                        match self.states[wid].next.get_mut(&symbol) {
                            Some(target) if *target == q => *target = clone,
                            _ => break,
                        }
                        w = self.states[wid].link;
                    }

                    self.states[q].link = Some(clone);
                    self.states[cur].link = Some(clone);
                }
            }
        }

        debug_assert!(
            self.states[cur]
                .link
                .is_some_and(|l| self.states[l].len < self.states[cur].len),
            "suffix link must point to a strictly shorter state"
        );

        self.last = cur;
    }

    /// Rebuild the decreasing-length state order used by queries
    ///
    /// Always a full rebuild, never incremental: any `append` after a
    /// finalize invalidates the order, and queries refuse to run until it is
    /// rebuilt.
    pub fn finalize(&mut self) {
        let mut order: Vec<StateId> = (0..self.states.len()).collect();
        order.sort_unstable_by_key(|&s| std::cmp::Reverse(self.states[s].len));
        self.by_len_desc = order;
        self.finalized = true;
    }

    fn alloc(&mut self, state: State) -> StateId {
        let id = self.states.len();
        self.states.push(state);
        id
    }

    /// All states, indexed by `StateId`
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of states in the arena
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of bytes appended so far
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Number of states created by splitting
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Whether the sorted view matches the current arena
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// State ids in decreasing order of `len`
    ///
    /// Only meaningful when [`Self::is_finalized`] returns true.
    pub(crate) fn by_len_desc(&self) -> &[StateId] {
        &self.by_len_desc
    }
}

impl Default for SuffixAutomaton {
    fn default() -> Self {
        Self::new()
    }
}
