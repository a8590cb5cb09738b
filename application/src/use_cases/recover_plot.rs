//! Recover Plot Node use case.
//!
//! Obtains one narrative node — title, summary, narration, two choices —
//! from the generation service.

use crate::ports::text_generator::TextGenerator;
use crate::use_cases::shared::{complete_or_upstream, decode_body};
use questforge_domain::{PlotNode, RecoveryError, parse_plot_node};
use std::sync::Arc;
use tracing::info;

/// Use case for recovering a [`PlotNode`] from the service.
pub struct RecoverPlotNodeUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl RecoverPlotNodeUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Send `prompt` through the generator port and recover the node.
    pub async fn execute(&self, prompt: &str) -> Result<PlotNode, RecoveryError> {
        let body = complete_or_upstream(self.generator.as_ref(), prompt).await?;
        let node = Self::recover(&body)?;
        info!(title = %node.title, "recovered plot node");
        Ok(node)
    }

    /// Offline entry point: recover directly from a raw reply body.
    pub fn recover(raw: &str) -> Result<PlotNode, RecoveryError> {
        let value = decode_body(raw)?;
        parse_plot_node(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::StubGenerator;
    use questforge_domain::NextId;

    const NODE: &str = r#"{
        "title": "First Obstacle",
        "summary": "A collapsed bridge blocks the mountain pass.",
        "narration": "Wind howls through the gorge as you reach the edge.",
        "choices": [
            {"text": "Confront it.", "next": 2, "stat": "Bravery"},
            {"text": "Find another way.", "next": 3, "stat": "Logic"}
        ]
    }"#;

    #[tokio::test]
    async fn recovers_a_clean_node() {
        let use_case = RecoverPlotNodeUseCase::new(Arc::new(StubGenerator::reply(NODE)));
        let node = use_case.execute("prompt").await.unwrap();
        assert_eq!(node.title, "First Obstacle");
        assert_eq!(node.choices[1].next, NextId::Number(3));
    }

    #[tokio::test]
    async fn missing_choices_is_a_schema_error() {
        let body = r#"{"title": "t", "summary": "s", "narration": "n"}"#;
        let use_case = RecoverPlotNodeUseCase::new(Arc::new(StubGenerator::reply(body)));
        let err = use_case.execute("prompt").await.unwrap_err();
        assert_eq!(err.kind(), "schema_error");
        assert!(err.to_string().contains("`choices`"));
    }

    #[test]
    fn offline_recover_strips_fences() {
        let raw = format!("```json\n{NODE}\n```");
        let node = RecoverPlotNodeUseCase::recover(&raw).unwrap();
        assert_eq!(node.choices.len(), 2);
    }
}
