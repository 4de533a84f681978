//! Property-based tests for the ranged and recurrence sequences.

use num_bigint::BigUint;
use proptest::prelude::*;

use lazyseq_core::materialize::collect_with_bound;
use lazyseq_core::{
    FibonacciSequence, Range, RangeConfig, RangeSequence, ResumeSignal, Sequence, SequenceError,
};

fn expected_progression(start: i64, end: i64, step: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut i = start;
    while i < end {
        out.push(i);
        i += step;
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// `collect` yields exactly the arithmetic progression below `end`.
    #[test]
    fn collect_matches_progression(start in -500i64..500, end in -500i64..500, step in 1i64..50) {
        let mut seq = RangeSequence::new(RangeConfig::bounded(start, end).with_step(step)).unwrap();
        let values = seq.collect_values(None).unwrap();
        prop_assert_eq!(&values, &expected_progression(start, end, step));

        let span = end - start;
        let count = if span > 0 { (span + step - 1) / step } else { 0 };
        prop_assert_eq!(values.len() as i64, count);
        let range = Range::new(RangeConfig::bounded(start, end).with_step(step)).unwrap();
        prop_assert_eq!(range.count(), Some(count as u64));
    }

    /// Exactly `count` non-terminal steps, then `done` forever.
    #[test]
    fn terminal_after_count(start in -100i64..100, len in 0i64..100, step in 1i64..10, extra in 1usize..5) {
        let end = start + len;
        let count = Range::new(RangeConfig::bounded(start, end).with_step(step)).unwrap().count().unwrap();
        let mut seq = RangeSequence::new(RangeConfig::bounded(start, end).with_step(step)).unwrap();
        for _ in 0..count {
            prop_assert!(!seq.resume(None).is_done());
        }
        for _ in 0..extra {
            prop_assert!(seq.resume(None).is_done());
        }
    }

    /// The iterator adapter and manual resumes agree, value for value.
    #[test]
    fn adapter_equivalence(start in -1000i64..1000, len in 0i64..300, step in 1i64..20) {
        let config = RangeConfig::bounded(start, start + len).with_step(step);

        let mut manual = Vec::new();
        let mut seq = RangeSequence::new(config).unwrap();
        loop {
            let result = seq.resume(None);
            if result.is_done() {
                break;
            }
            manual.push(*result.value().unwrap());
        }

        let adapted: Vec<i64> = RangeSequence::new(config).unwrap().to_iterable().collect();
        prop_assert_eq!(manual, adapted);
    }

    /// Descending ranges mirror ascending ones.
    #[test]
    fn descending_mirrors_ascending(start in -200i64..200, len in 0i64..200, step in 1i64..10) {
        let up: Vec<i64> = RangeSequence::new(RangeConfig::bounded(-start, -start + len).with_step(step))
            .unwrap()
            .to_iterable()
            .map(|v| -v)
            .collect();
        let down: Vec<i64> = RangeSequence::new(RangeConfig::bounded(start, start - len).with_step(-step))
            .unwrap()
            .to_iterable()
            .collect();
        prop_assert_eq!(up, down);
    }

    /// F(n) + F(n+1) == F(n+2) along the sequence, and reset rewinds to 0.
    #[test]
    fn recurrence_holds(n in 0usize..300, reset_after in 1usize..50) {
        let values: Vec<BigUint> = FibonacciSequence::new().to_iterable().take(n + 3).collect();
        prop_assert_eq!(&values[n] + &values[n + 1], values[n + 2].clone());

        let mut fib = FibonacciSequence::new();
        for _ in 0..reset_after {
            fib.resume(None);
        }
        prop_assert_eq!(fib.resume(Some(ResumeSignal::Reset)).into_value(), Some(BigUint::from(0u32)));
    }

    /// Unlimited collect under a bound smaller than the range fails.
    #[test]
    fn bound_guards_long_ranges(len in 11i64..1000) {
        let mut seq = RangeSequence::new(RangeConfig::bounded(0, len)).unwrap();
        let result = collect_with_bound(&mut seq, None, 10);
        let is_non_terminating = matches!(result, Err(SequenceError::NonTerminating { checked: 10 }));
        prop_assert!(is_non_terminating);
    }
}
