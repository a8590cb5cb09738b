//! Plumbing shared by the recovery use cases.

use crate::ports::text_generator::TextGenerator;
use questforge_domain::util::truncate_str;
use questforge_domain::{RecoveryError, decode, normalize};
use serde_json::Value;
use tracing::{debug, warn};

/// Ask the generator for a body, mapping port failure to `Upstream`.
pub(crate) async fn complete_or_upstream(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<String, RecoveryError> {
    match generator.complete(prompt).await {
        Ok(body) => {
            debug!(bytes = body.len(), "received reply body");
            Ok(body)
        }
        Err(err) => {
            warn!(error = %err, "generation call failed");
            Err(RecoveryError::Upstream {
                detail: err.to_string(),
            })
        }
    }
}

/// Run the repair and parse stages over a raw body.
pub(crate) fn decode_body(raw: &str) -> Result<Value, RecoveryError> {
    let text = normalize(raw);
    if text != raw {
        debug!(raw = truncate_str(raw, 200), "normalization repaired reply");
    }
    decode(&text)
}
