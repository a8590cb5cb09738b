//! Recover Quiz use case.
//!
//! Obtains a five-question moral-dilemma quiz from the generation service.
//! Validation is strict: one bad option rejects the whole set, because quiz
//! consumers bind option identifiers by position.

use crate::ports::text_generator::TextGenerator;
use crate::use_cases::shared::{complete_or_upstream, decode_body};
use questforge_domain::{QuizSet, RecoveryError, parse_quiz_set};
use std::sync::Arc;
use tracing::info;

/// Use case for recovering a [`QuizSet`] from the service.
pub struct RecoverQuizUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl RecoverQuizUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Send `prompt` through the generator port and recover the quiz set.
    pub async fn execute(&self, prompt: &str) -> Result<QuizSet, RecoveryError> {
        let body = complete_or_upstream(self.generator.as_ref(), prompt).await?;
        let set = Self::recover(&body)?;
        info!(questions = set.questions().len(), "recovered quiz set");
        Ok(set)
    }

    /// Offline entry point: recover directly from a raw reply body.
    pub fn recover(raw: &str) -> Result<QuizSet, RecoveryError> {
        let value = decode_body(raw)?;
        parse_quiz_set(&value)
    }
}
