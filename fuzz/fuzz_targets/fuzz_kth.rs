#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sax::automaton::SuffixAutomaton;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a [u8],
    k: u64,
}

fuzz_target!(|input: Input| {
    // kth_substring must never panic: in-range k yields a real substring,
    // out-of-range k yields an error
    let sa = SuffixAutomaton::from_bytes(input.text);
    let total = sa.distinct_substrings().unwrap();

    match sa.kth_substring(input.k) {
        Ok(substring) => {
            assert!(input.k >= 1 && input.k <= total);
            assert!(!substring.is_empty());
            assert!(sa.contains(&substring));
        }
        Err(_) => {
            assert!(input.k == 0 || input.k > total);
        }
    }
});
