//! Retrieval Test Suite
//!
//! End-to-end checks of the public lexis surface.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Stemmer contract (determinism, short words, special forms, known vectors)
//! - **Tier 2**: Normalizer pipeline
//! - **Tier 3**: Ranker scoring invariants
//! - **Tier 4**: Sample selection scenarios
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test retrieval
//! ```

// Test modules
mod test_utils;

// Tier 1: Stemmer Contract
mod tier1_stemmer_contract;

// Tier 2: Normalizer Pipeline
mod tier2_normalizer_pipeline;

// Tier 3: Ranker Invariants
mod tier3_ranker_invariants;

// Tier 4: Sample Selection
mod tier4_sample_selection;
