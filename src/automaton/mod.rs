//! Suffix automaton module
//!
//! An online suffix automaton: the minimal DFA recognizing exactly the
//! substrings of the text built so far. Construction is incremental (one
//! byte per step, linear overall) and querying happens on the finalized
//! automaton.
//!
//! ## Architecture
//!
//! - `builder`: state arena and the online extension algorithm
//! - `query`: substring counting, ranked (k-th) substring retrieval,
//!   membership
//! - `types`: state and stats type definitions
//!
//! ## Lifecycle
//!
//! Two phases: build, then query. `extend` finalizes automatically; raw
//! `append` calls must be followed by `finalize` before any counting query
//! will answer.

pub mod builder;
pub mod query;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixAutomaton;
pub use types::{AutomatonStats, ROOT, State, StateId};
