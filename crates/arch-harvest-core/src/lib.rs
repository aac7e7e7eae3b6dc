//! # arch-harvest-core
//!
//! Core classification engine for arch-harvest: infers an architecture
//! style per repository, classifies each source file's architectural layer,
//! extracts cross-layer dependency signals, and assembles one dataset
//! record per accepted file.
//!
//! Nothing here parses source code — classification is heuristic text and
//! path matching only. The violation rule tables themselves live in
//! `arch-harvest-rules` and reach the [`Analyzer`] through the
//! [`RuleSet`] seam.
//!
//! ```ignore
//! use arch_harvest_core::Analyzer;
//! use arch_harvest_rules::BuiltinRules;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./repos")
//!     .rules(Box::new(BuiltinRules::new()))
//!     .build()?;
//! let outcome = analyzer.scan()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod characteristics;
pub mod config;
pub mod deps;
pub mod engine;
pub mod label;
pub mod layer;
pub mod metrics;
pub mod style;
pub mod types;
pub mod util;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, ScanOutcome, ScanSummary};
pub use config::{Config, ConfigError, OutputConfig, ScanConfig};
pub use engine::{evaluate, RuleDef, RuleInput, RuleSet};
pub use types::{
    CodeCharacteristics, CodeMetrics, DependencyCounts, DirectionVerdict, FileRecord,
    IndicatorScores, Layer, Severity, Style, StyleVerdict, ViolationRecord, CLEAN_TAG,
};
