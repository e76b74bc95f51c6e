//! Shared fixtures for integration tests and benchmarks across crates:
//! a small, scenario-focused taxonomy plus sample case and question texts.

use casemap_core::errors::TaxonomyError;
use casemap_taxonomy::TaxonomyStore;

/// A compact taxonomy exercising every matching tier: exact canonical
/// hits, paraphrase hits, near-miss fuzzy targets, and gazetteer entries.
pub const FIXTURE_TAXONOMY_JSON: &str = r#"{
    "version": "fixture",
    "categories": {
        "StrategicTheory": {
            "PlatformStrategy": {
                "network effects": ["network externalities", "virtuous cycle of adoption"],
                "two-sided platform": ["multi-sided marketplace"]
            },
            "TCE": {
                "transaction costs": ["market exchange frictions"],
                "asset specificity": ["specialized inputs"],
                "holdup risk": ["supplier hold-up"]
            },
            "RBV": {
                "dynamic capabilities": ["orchestrating resources"]
            }
        },
        "BusinessConcept": {
            "MarketStrategy": {
                "switching costs": [],
                "first mover advantage": [],
                "modular construction": ["modular building systems"]
            },
            "Operations": {
                "learning curve": ["experience curve"]
            }
        },
        "IndustryContext": {
            "FocalCompany": {
                "terra": []
            },
            "CompaniesAndSoftware": {
                "katerra": []
            },
            "ProductsAndSystems": {
                "clt panels": []
            }
        }
    }
}"#;

/// Load the fixture taxonomy.
pub fn fixture_taxonomy() -> Result<TaxonomyStore, TaxonomyError> {
    TaxonomyStore::from_json(FIXTURE_TAXONOMY_JSON)
}

/// A short case text that touches entities, noun phrases, and verbs.
pub fn sample_case_text() -> &'static str {
    "Terra competes on modular construction. Its network externalities grow \
     as more suppliers join, but asset specificity and supplier hold-up \
     keep transaction costs high."
}

/// A question text referencing concepts also present in the case.
pub fn sample_question_text() -> &'static str {
    "How should Terra manage switching costs and network effects as it expands?"
}
