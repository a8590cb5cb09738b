//! Application layer for questforge
//!
//! This crate contains the recovery use cases and port definitions. It
//! depends only on the domain layer.
//!
//! Each response kind the generation service can be asked for has one use
//! case. A use case owns nothing but an injected [`TextGenerator`] port; it
//! sends the caller's prompt through the port, then drives the domain
//! pipeline (normalize → decode → validate) over the reply. Every use case
//! also exposes an offline entry point that accepts a raw body directly, for
//! callers that performed the generation themselves.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use ports::text_generator::{GeneratorError, TextGenerator};
pub use use_cases::{
    analyze_profile::AnalyzeProfileUseCase, recover_plot::RecoverPlotNodeUseCase,
    recover_questions::RecoverQuestionsUseCase, recover_quiz::RecoverQuizUseCase,
    recover_start::RecoverAlternateStartUseCase,
};
