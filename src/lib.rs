//! # SAX - Suffix Automaton Index
//!
//! SAX builds a suffix automaton (the minimal DFA recognizing exactly the
//! substrings of a text) online, one byte at a time, in time and space
//! linear in the text length. On top of the automaton it answers two
//! derived queries: the number of distinct substrings and the
//! lexicographically k-th distinct substring.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`automaton`] - Arena-based automaton construction and queries
//! - [`output`] - Terminal formatting for query results and stats
//!
//! ## Quick Start
//!
//! ```
//! use sax::automaton::SuffixAutomaton;
//!
//! let sa = SuffixAutomaton::from_bytes(b"abcbc");
//!
//! assert_eq!(sa.distinct_substrings().unwrap(), 12);
//! assert_eq!(sa.kth_substring(1).unwrap(), b"a");
//! assert!(sa.contains(b"bcb"));
//! ```
//!
//! ## Incremental builds
//!
//! The automaton can grow after construction; appending bytes invalidates
//! the sorted state view the counting queries depend on, so a `finalize`
//! (or another `extend`) is required before querying again:
//!
//! ```
//! use sax::automaton::SuffixAutomaton;
//!
//! let mut sa = SuffixAutomaton::from_bytes(b"abc");
//! sa.append(b'd');
//! sa.finalize();
//! assert_eq!(sa.distinct_substrings().unwrap(), 10);
//! ```

pub mod automaton;
pub mod output;
