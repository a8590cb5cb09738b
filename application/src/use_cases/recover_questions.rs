//! Recover Questions use case.
//!
//! Obtains three personality-quiz questions from the generation service and
//! validates them leniently — junk entries are filtered, the first three
//! usable questions win.

use crate::ports::text_generator::TextGenerator;
use crate::use_cases::shared::{complete_or_upstream, decode_body};
use questforge_domain::{QuestionList, RecoveryError, parse_question_list};
use std::sync::Arc;
use tracing::info;

/// Use case for recovering a [`QuestionList`] from the service.
pub struct RecoverQuestionsUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl RecoverQuestionsUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Send `prompt` through the generator port and recover the questions.
    pub async fn execute(&self, prompt: &str) -> Result<QuestionList, RecoveryError> {
        let body = complete_or_upstream(self.generator.as_ref(), prompt).await?;
        let list = Self::recover(&body)?;
        info!(count = list.questions().len(), "recovered question list");
        Ok(list)
    }

    /// Offline entry point: recover directly from a raw reply body.
    pub fn recover(raw: &str) -> Result<QuestionList, RecoveryError> {
        let value = decode_body(raw)?;
        parse_question_list(&value)
    }
}
