//! Types for the suffix automaton
//!
//! This module defines the state arena building blocks and the stats
//! snapshot exposed by the query layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable index of a state in the automaton's arena
///
/// States are always addressed by index, never by reference: the arena is a
/// growable `Vec` and reallocates during construction.
pub type StateId = usize;

/// Index of the initial state (the empty-string state)
///
/// Created once at construction time, never removed; the only state with
/// `link == None`.
pub const ROOT: StateId = 0;

/// A state of the automaton: one equivalence class of substring end positions
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Length of the longest string that reaches this state
    pub len: usize,
    /// Suffix link: the state for this state's longest proper suffix class.
    /// `None` only for the initial state.
    pub link: Option<StateId>,
    /// Outgoing transitions, at most one per symbol.
    ///
    /// A `BTreeMap` keeps iteration in increasing symbol order, which the
    /// k-th substring descent relies on for its lexicographic guarantee.
    pub next: BTreeMap<u8, StateId>,
}

/// Summary of a built automaton, suitable for display or JSON output
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AutomatonStats {
    /// Number of bytes appended so far
    pub text_len: usize,
    /// Total states in the arena (including the initial state)
    pub state_count: usize,
    /// States created by splitting during construction
    pub clone_count: usize,
    /// Total transitions across all states
    pub transition_count: usize,
    /// Number of distinct non-empty substrings of the text
    pub distinct_substrings: u64,
}
