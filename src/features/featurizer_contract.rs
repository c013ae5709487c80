use super::*;
use crate::corpus::TaggedToken;
use proptest::prelude::*;

fn build_corpus(docs: Vec<Vec<String>>) -> Vec<Instance> {
    docs.into_iter()
        .enumerate()
        .map(|(i, words)| {
            let raw = words.join(" ");
            let tags = words
                .iter()
                .map(|w| TaggedToken::new(w, w, "N(soort,ev)", Some(0)))
                .collect();
            Instance::new(if i % 2 == 0 { "even" } else { "odd" }, &raw, tags)
        })
        .collect()
}

fn doc_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[a-d]{1,4}", 1..6),
        1..8,
    )
}

proptest! {
    /// One matrix row and one label per corpus instance, in corpus order.
    #[test]
    fn prop_rows_and_labels_align(docs in doc_strategy()) {
        let data = build_corpus(docs);
        let config = FeaturizerConfig::with_features(&["simple_stats", "token_ngrams"]);
        let mut featurizer = Featurizer::from_config(&config, None).expect("config");

        let (matrix, labels) = featurizer.fit_transform(&data).expect("fit_transform");
        prop_assert_eq!(matrix.n_rows(), data.len());
        prop_assert_eq!(labels.len(), data.len());
        for (label, instance) in labels.iter().zip(&data) {
            prop_assert_eq!(label, &instance.label);
        }
    }

    /// Transform never mutates: repeated calls yield identical matrices.
    #[test]
    fn prop_transform_deterministic(docs in doc_strategy()) {
        let data = build_corpus(docs);
        let config = FeaturizerConfig::with_features(&["token_ngrams", "pos_ngrams"]);
        let mut featurizer = Featurizer::from_config(&config, None).expect("config");
        featurizer.fit(&data).expect("fit");

        let (first, _) = featurizer.transform(&data).expect("transform");
        let (second, _) = featurizer.transform(&data).expect("transform");
        prop_assert_eq!(first, second);
    }

    /// Count-based blocks are non-negative everywhere.
    #[test]
    fn prop_count_blocks_non_negative(docs in doc_strategy()) {
        let data = build_corpus(docs);
        let config = FeaturizerConfig::with_features(&[
            "token_ngrams",
            "char_ngrams",
            "pos_ngrams",
            "function_words",
        ]);
        let mut featurizer = Featurizer::from_config(&config, None).expect("config");

        let (matrix, _) = featurizer.fit_transform(&data).expect("fit_transform");
        prop_assert!(matrix.as_slice().iter().all(|&v| v >= 0.0));
    }

    /// The feature space is frozen at fit time: any corpus transforms to
    /// the same width, unseen keys simply contribute nothing.
    #[test]
    fn prop_width_frozen_across_corpora(
        train in doc_strategy(),
        test in doc_strategy(),
    ) {
        let train = build_corpus(train);
        let test = build_corpus(test);
        let config = FeaturizerConfig::with_features(&["token_ngrams", "char_ngrams"]);
        let mut featurizer = Featurizer::from_config(&config, None).expect("config");
        featurizer.fit(&train).expect("fit");

        let (train_matrix, _) = featurizer.transform(&train).expect("transform");
        let (test_matrix, _) = featurizer.transform(&test).expect("transform");
        prop_assert_eq!(train_matrix.n_cols(), test_matrix.n_cols());
    }

    /// A vocabulary cap bounds the n-gram block width.
    #[test]
    fn prop_max_features_bounds_width(
        docs in doc_strategy(),
        cap in 1_usize..10,
    ) {
        let data = build_corpus(docs);
        let config = FeaturizerConfig {
            features: vec!["token_ngrams".to_string()],
            ngrams: NgramSettings {
                n_list: vec![1],
                max_features: Some(cap),
                count_boundaries: false,
            },
            ..FeaturizerConfig::default()
        };
        let mut featurizer = Featurizer::from_config(&config, None).expect("config");

        let (matrix, _) = featurizer.fit_transform(&data).expect("fit_transform");
        prop_assert!(matrix.n_cols() <= cap);
    }
}
