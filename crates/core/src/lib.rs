//! Core types for lexis
//!
//! This crate defines the types shared by the engine, the CLI and the
//! facade crate:
//! - `Document` / `RankedResult`: corpus entries and scored hits
//! - `BM25Config` / `NormalizerConfig` / `LexisConfig`: configuration
//! - `LexisError` / `LexisResult`: the error surface

pub mod config;
pub mod document;
pub mod error;

pub use config::{BM25Config, LexisConfig, NormalizerConfig};
pub use document::{Document, RankedResult};
pub use error::{LexisError, LexisResult};
