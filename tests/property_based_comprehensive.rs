//! Property-based tests for leading-digit extraction and classification
//!
//! Core properties:
//! 1. Histogram totals never exceed the token count
//! 2. Excluded tokens never contribute
//! 3. Classification is deterministic and never panics
//! 4. The minimum-sample gate always wins below the threshold

use benford::classifier::{BenfordClassifier, Classification, ClassifierConfig};
use benford::digits::{extract_from_bytes, extract_leading_digit_histogram, Histogram};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_sample_size_bounded_by_tokens(text in "[0-9a-z .,+\\-\\t\\n]{0,200}") {
        let histogram = extract_leading_digit_histogram(&text);
        let tokens: Vec<&str> = text.split_ascii_whitespace().collect();

        prop_assert!(histogram.sample_size() <= tokens.len() as u64);

        let all_digit_led = tokens
            .iter()
            .all(|t| matches!(t.as_bytes()[0], b'1'..=b'9'));
        prop_assert_eq!(histogram.sample_size() == tokens.len() as u64, all_digit_led);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_excluded_prefixes_never_count(
        prefix in prop::sample::select(vec!["0", "-", "+", ".", "$", "a", "Z", "("]),
        rest in "[0-9]{0,6}",
    ) {
        let token = format!("{}{}", prefix, rest);
        prop_assert!(extract_leading_digit_histogram(&token).is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_leading_digit_hits_its_bucket(digit in 1u8..=9, rest in "[0-9a-z.]{0,8}") {
        let token = format!("{}{}", digit, rest);
        let histogram = extract_leading_digit_histogram(&token);
        prop_assert_eq!(histogram.sample_size(), 1);
        prop_assert_eq!(histogram.count_for_digit(digit), Some(1));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let histogram = extract_from_bytes(&bytes);
        let again = extract_from_bytes(&bytes);
        prop_assert_eq!(histogram, again);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_classification_deterministic(
        counts in prop::array::uniform9(0u64..500),
        alpha in 0.001f64..0.999,
        min_sample in prop::option::of(0u64..50),
    ) {
        let classifier = BenfordClassifier::new();
        let histogram = Histogram::from_counts(counts);
        let config = ClassifierConfig::default()
            .with_alpha(alpha)
            .with_min_sample(min_sample);

        let first = classifier.assess(&histogram, &config).unwrap();
        let second = classifier.assess(&histogram, &config).unwrap();
        prop_assert_eq!(&first, &second);

        if let Some(test) = first.test {
            prop_assert!(test.statistic.is_finite() && test.statistic >= 0.0);
            prop_assert!((0.0..=1.0).contains(&test.pvalue));
            prop_assert_eq!(
                first.classification == Classification::NonConformingSufficientSample,
                test.pvalue < alpha
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_gate_forces_insufficient(
        counts in prop::array::uniform9(0u64..5),
        extra in 1u64..100,
    ) {
        let classifier = BenfordClassifier::new();
        let histogram = Histogram::from_counts(counts);
        let config = ClassifierConfig::default()
            .with_min_sample(Some(histogram.sample_size() + extra));

        let assessment = classifier.assess(&histogram, &config).unwrap();
        prop_assert_eq!(assessment.classification, Classification::InsufficientSample);
        prop_assert!(assessment.test.is_none());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_zero_sample_always_insufficient(min_sample in prop::option::of(0u64..10)) {
        let classifier = BenfordClassifier::new();
        let config = ClassifierConfig::default().with_min_sample(min_sample);
        prop_assert_eq!(
            classifier.classify(&Histogram::new(), &config).unwrap(),
            Classification::InsufficientSample
        );
    }
}
