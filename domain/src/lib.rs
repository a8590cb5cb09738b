//! Domain layer for questforge
//!
//! This crate contains the core business logic: recovering well-typed game
//! entities from the free-text replies of an LLM service, and classifying
//! trait profiles into archetypes. It has no dependencies on infrastructure
//! or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Response Recovery
//!
//! The generation service returns JSON wrapped in whatever the model felt
//! like that day — code fences, an outer quote pair, double-encoded strings,
//! dropped commas. Recovery is a fixed pipeline:
//!
//! ```text
//! raw text → normalize() → decode() → parse_<kind>() → typed entity
//! ```
//!
//! Each stage either succeeds or returns a [`RecoveryError`] carrying the
//! most specific text available for diagnostics. No stage retries: the
//! pipeline is pure, so re-running it on the same malformed text can never
//! succeed.
//!
//! ## Traits and Archetypes
//!
//! A player is scored on four traits (bravery, empathy, curiosity, logic).
//! The two highest-ranked traits select one of twelve archetypes via a
//! directional lookup — `(bravery, empathy)` and `(empathy, bravery)` are
//! different archetypes, reflecting which trait dominates.

pub mod core;
pub mod profile;
pub mod quiz;
pub mod reply;
pub mod story;
pub mod util;

// Re-export commonly used types
pub use crate::core::{
    error::{RecoveryError, SchemaViolation},
    trait_key::{TraitKey, TraitScores},
};
pub use profile::{
    archetype::{Archetype, classify},
    entities::{ArchetypeResult, ProfileAnalysis, TraitProfile},
    parser::parse_trait_profile,
};
pub use quiz::{
    entities::{QuestionList, QuizOption, QuizQuestion, QuizSet},
    parser::{parse_question_list, parse_quiz_set},
};
pub use reply::{decode::decode, normalize::normalize};
pub use story::{
    entities::{AlternateStart, Choice, NextId, PlotNode},
    parser::{parse_alternate_start, parse_plot_node},
};
