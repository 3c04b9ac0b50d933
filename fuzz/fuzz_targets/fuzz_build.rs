#![no_main]

use libfuzzer_sys::fuzz_target;
use sax::automaton::{ROOT, SuffixAutomaton};

fuzz_target!(|data: &[u8]| {
    // Build from arbitrary bytes and check the structural invariants
    let sa = SuffixAutomaton::from_bytes(data);
    let states = sa.states();

    if data.len() >= 2 {
        assert!(states.len() <= 2 * data.len() - 1);
    }

    for (id, state) in states.iter().enumerate() {
        for &target in state.next.values() {
            assert!(states[target].len > state.len);
        }
        if id == ROOT {
            assert!(state.link.is_none());
        } else {
            let link = state.link.expect("non-root state without suffix link");
            assert!(states[link].len < state.len);
        }
    }

    // The whole text and every suffix must be recognized
    assert!(sa.contains(data));
    if !data.is_empty() {
        assert!(sa.contains(&data[data.len() / 2..]));
    }
});
