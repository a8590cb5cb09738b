//! Recovery use cases, one per response kind.
//!
//! | Use case | Response kind | Validation temperament |
//! |----------|---------------|------------------------|
//! | [`recover_questions::RecoverQuestionsUseCase`] | 3 question strings | lenient |
//! | [`analyze_profile::AnalyzeProfileUseCase`] | trait profile + archetype | coercing |
//! | [`recover_quiz::RecoverQuizUseCase`] | 5-question quiz set | strict |
//! | [`recover_plot::RecoverPlotNodeUseCase`] | narrative node | strict |
//! | [`recover_start::RecoverAlternateStartUseCase`] | alternate start | strict |

pub mod analyze_profile;
pub mod recover_plot;
pub mod recover_questions;
pub mod recover_quiz;
pub mod recover_start;
mod shared;
