//! Property tests for the resolution cascade and the aggregator.

use proptest::prelude::*;

use casemap_core::config::{CasemapConfig, EmbeddingConfig};
use casemap_core::types::{
    CandidatePhrase, Category, ConceptMatch, Confidence, MatchMethod, PhraseKind, SourceTag,
};
use casemap_resolve::{aggregate, EmbeddingEngine, Resolver};
use test_fixtures::fixture_taxonomy;

fn phrases() -> Vec<CandidatePhrase> {
    [
        "network externalities",
        "transact cost",
        "asset specificity",
        "switching cost burden",
        "network density",
        "purple elephant dancing",
        "modular building systems",
        "supplier hold-up",
    ]
    .iter()
    .map(|t| CandidatePhrase::new(*t, PhraseKind::NounPhrase, SourceTag::Case))
    .collect()
}

fn match_count(fuzzy_threshold: f64, semantic_threshold: f64) -> usize {
    let taxonomy = fixture_taxonomy().unwrap();
    let engine = EmbeddingEngine::new(&EmbeddingConfig::default());
    let mut config = CasemapConfig::default();
    config.resolve.fuzzy_threshold = fuzzy_threshold;
    config.resolve.semantic_threshold = semantic_threshold;
    let resolver = Resolver::new(&taxonomy, &engine, &config);
    resolver.resolve_all(&phrases()).unwrap().len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Raising either threshold never yields more matches.
    #[test]
    fn threshold_monotonicity(
        low_fuzzy in 0.0f64..100.0,
        high_fuzzy in 0.0f64..100.0,
        low_semantic in 0.0f64..1.0,
        high_semantic in 0.0f64..1.0,
    ) {
        let (low_fuzzy, high_fuzzy) = if low_fuzzy <= high_fuzzy {
            (low_fuzzy, high_fuzzy)
        } else {
            (high_fuzzy, low_fuzzy)
        };
        let (low_semantic, high_semantic) = if low_semantic <= high_semantic {
            (low_semantic, high_semantic)
        } else {
            (high_semantic, low_semantic)
        };

        let loose = match_count(low_fuzzy, low_semantic);
        let strict = match_count(high_fuzzy, high_semantic);
        prop_assert!(strict <= loose, "strict={strict} loose={loose}");
    }
}

fn arbitrary_match() -> impl Strategy<Value = ConceptMatch> {
    (
        prop::sample::select(vec!["alpha", "beta", "gamma", "delta"]),
        prop::sample::select(vec![SourceTag::Case, SourceTag::Question, SourceTag::UserInputs]),
        0.0f64..=1.0,
    )
        .prop_map(|(term, source, confidence)| ConceptMatch {
            canonical_term: term.to_string(),
            category: Category::BusinessConcept,
            framework: None,
            surface: term.to_string(),
            confidence: Confidence::new(confidence),
            method: MatchMethod::Fuzzy,
            source,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// No two entries of an aggregated set share (canonical_term, source).
    #[test]
    fn dedup_invariant(matches in prop::collection::vec(arbitrary_match(), 0..40)) {
        let set = aggregate(matches);
        let mut seen = std::collections::HashSet::new();
        for m in set.iter() {
            prop_assert!(seen.insert((m.canonical_term.clone(), m.source)));
        }
    }

    /// Aggregated sets are sorted by non-increasing confidence.
    #[test]
    fn ordering_invariant(matches in prop::collection::vec(arbitrary_match(), 0..40)) {
        let set = aggregate(matches);
        for pair in set.matches().windows(2) {
            prop_assert!(pair[0].confidence.value() >= pair[1].confidence.value());
        }
    }
}

/// Every surface form in the taxonomy resolves through the exact tier
/// with maximum confidence — the fuzzy and semantic tiers never see it.
#[test]
fn exact_tier_precedence_for_all_surface_forms() {
    let taxonomy = fixture_taxonomy().unwrap();
    let engine = EmbeddingEngine::new(&EmbeddingConfig::default());
    let config = CasemapConfig::default();
    let resolver = Resolver::new(&taxonomy, &engine, &config);

    for entry in taxonomy.entries() {
        for form in entry.surface_forms() {
            let found = resolver.resolve(form, SourceTag::Case).unwrap();
            assert_eq!(found.len(), 1, "form '{form}' should resolve");
            assert_eq!(found[0].method, MatchMethod::Exact, "form '{form}'");
            assert_eq!(found[0].confidence.value(), 1.0);
            assert_eq!(found[0].canonical_term, entry.canonical_term);
        }
    }
}

/// Fixed taxonomy + fixed thresholds + fixed input give identical output.
#[test]
fn resolution_is_deterministic() {
    let taxonomy = fixture_taxonomy().unwrap();
    let engine = EmbeddingEngine::new(&EmbeddingConfig::default());
    let config = CasemapConfig::default();
    let resolver = Resolver::new(&taxonomy, &engine, &config);

    let first = resolver.resolve_all(&phrases()).unwrap();
    for _ in 0..3 {
        assert_eq!(resolver.resolve_all(&phrases()).unwrap(), first);
    }
}
