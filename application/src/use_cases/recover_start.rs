//! Recover Alternate Start use case.
//!
//! Obtains a randomized starting scenario — time period, location, role,
//! situation — generated for a player's archetype and stats.

use crate::ports::text_generator::TextGenerator;
use crate::use_cases::shared::{complete_or_upstream, decode_body};
use questforge_domain::{AlternateStart, RecoveryError, parse_alternate_start};
use std::sync::Arc;
use tracing::info;

/// Use case for recovering an [`AlternateStart`] from the service.
pub struct RecoverAlternateStartUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl RecoverAlternateStartUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Send `prompt` through the generator port and recover the scenario.
    pub async fn execute(&self, prompt: &str) -> Result<AlternateStart, RecoveryError> {
        let body = complete_or_upstream(self.generator.as_ref(), prompt).await?;
        let start = Self::recover(&body)?;
        info!(time_period = %start.time_period, "recovered alternate start");
        Ok(start)
    }

    /// Offline entry point: recover directly from a raw reply body.
    pub fn recover(raw: &str) -> Result<AlternateStart, RecoveryError> {
        let value = decode_body(raw)?;
        parse_alternate_start(&value)
    }
}
