//! Analyze Profile use case.
//!
//! Recovers a trait profile from the service's analysis reply, then runs
//! the archetype classifier over the coerced scores. Classification never
//! fails — only recovery can.

use crate::ports::text_generator::TextGenerator;
use crate::use_cases::shared::{complete_or_upstream, decode_body};
use questforge_domain::{ProfileAnalysis, RecoveryError, classify, parse_trait_profile};
use std::sync::Arc;
use tracing::info;

/// Use case for recovering and classifying a [`ProfileAnalysis`].
pub struct AnalyzeProfileUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl AnalyzeProfileUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Send `prompt` through the generator port, recover the profile, and
    /// classify it.
    pub async fn execute(&self, prompt: &str) -> Result<ProfileAnalysis, RecoveryError> {
        let body = complete_or_upstream(self.generator.as_ref(), prompt).await?;
        let analysis = Self::recover(&body)?;
        info!(
            archetype = %analysis.result.archetype,
            primary = %analysis.result.primary,
            secondary = %analysis.result.secondary,
            "classified profile"
        );
        Ok(analysis)
    }

    /// Offline entry point: recover and classify from a raw reply body.
    pub fn recover(raw: &str) -> Result<ProfileAnalysis, RecoveryError> {
        let value = decode_body(raw)?;
        let profile = parse_trait_profile(&value)?;
        let result = classify(&profile.stats);
        Ok(ProfileAnalysis::new(profile, result))
    }
}
