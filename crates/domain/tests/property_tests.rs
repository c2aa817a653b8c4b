use numtext_domain::{
    Mode, compute_statistics, count, quicksort, sorted_words, sqrt_newton, to_binary,
    to_hexadecimal, tokenize,
};
use proptest::prelude::*;

fn multiset(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

proptest! {
    #[test]
    fn sort_is_ordered_permutation(values in prop::collection::vec(-1_000i64..1_000, 0..300)) {
        let sorted = quicksort(&values);
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(multiset(&sorted), multiset(&values));
    }

    #[test]
    fn sort_is_idempotent(values in prop::collection::vec(-1e6f64..1e6, 0..200)) {
        let once = quicksort(&values);
        let twice = quicksort(&once);
        prop_assert_eq!(once, twice);
    }

    // 20 fixed Newton steps from `x` only converge for x up to about 1e9.
    #[test]
    fn sqrt_squares_back(x in 0.0f64..1e6) {
        let root = sqrt_newton(x).unwrap();
        prop_assert!((root * root - x).abs() <= 1e-9 * x.max(1.0));
    }

    #[test]
    fn sqrt_rejects_negatives(x in -1e6f64..-1e-9) {
        prop_assert!(sqrt_newton(x).is_err());
    }

    #[test]
    fn statistics_are_bounded(values in prop::collection::vec(-1_000i32..1_000, 1..100)) {
        let data: Vec<f64> = values.iter().copied().map(f64::from).collect();
        let stats = compute_statistics(&data).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(stats.count, data.len());
        prop_assert!(stats.mean >= min - 1e-9 && stats.mean <= max + 1e-9);
        prop_assert!(stats.median >= min && stats.median <= max);
        prop_assert!(stats.variance >= 0.0);
        for value in stats.mode.values() {
            prop_assert!(data.contains(value));
        }
        if let Mode::Multiple(ties) = &stats.mode {
            prop_assert!(ties.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn negative_renderings_have_fixed_width(n in i64::MIN..0) {
        let binary = to_binary(n);
        let hex = to_hexadecimal(n);
        prop_assert_eq!(binary.len(), 10);
        prop_assert_eq!(hex.len(), 8);
        prop_assert!(binary.chars().all(|c| c == '0' || c == '1'));
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn non_negative_renderings_parse_back(n in 0i64..=i64::MAX) {
        prop_assert_eq!(i64::from_str_radix(&to_binary(n), 2).unwrap(), n);
        prop_assert_eq!(i64::from_str_radix(&to_hexadecimal(n), 16).unwrap(), n);
    }

    #[test]
    fn retokenizing_joined_tokens_is_stable(line in "\\PC{0,80}") {
        let tokens: Vec<&str> = tokenize(&line).into_iter().map(|t| t.as_str()).collect();
        let joined = tokens.join(" ");
        let again: Vec<&str> = tokenize(&joined).into_iter().map(|t| t.as_str()).collect();
        prop_assert_eq!(tokens, again);
    }

    #[test]
    fn word_counts_sum_to_token_count(line in "[a-zA-Z ,.]{0,120}") {
        let tokens = tokenize(&line);
        let total = tokens.len();
        let table = count(tokens);
        prop_assert_eq!(table.total().value(), total);

        let words: Vec<String> = sorted_words(&table).into_iter().map(|(w, _)| w).collect();
        prop_assert!(words.windows(2).all(|w| w[0] < w[1]));
    }
}
