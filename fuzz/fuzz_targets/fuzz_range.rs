#![no_main]

use libfuzzer_sys::fuzz_target;

use lazyseq_core::materialize::collect_with_bound;
use lazyseq_core::{Range, RangeConfig, RangeSequence, Sequence, SequenceError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        i64::from_le_bytes(bytes)
    };
    let config = RangeConfig::bounded(word(0), word(1)).with_step(word(2));

    let Ok(range) = Range::new(config) else {
        assert_eq!(config.step, 0);
        return;
    };
    let mut seq = RangeSequence::new(config).unwrap();

    // Cap the work per input; counts above the bound must report NonTerminating.
    match collect_with_bound(&mut seq, None, 4096) {
        Ok(values) => {
            assert_eq!(Some(values.len() as u64), range.count());
            assert!(seq.resume(None).is_done());
        }
        Err(SequenceError::NonTerminating { checked }) => {
            assert_eq!(checked, 4096);
            assert!(range.count().unwrap() > 4096);
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
});
