//! Parser for the trait profile response kind.

use crate::core::error::RecoveryError;
use crate::core::trait_key::{TraitKey, TraitScores};
use crate::profile::entities::TraitProfile;
use crate::reply::shape::{as_object, coerce_int};
use serde_json::Value;

/// Recover a [`TraitProfile`] from a decoded value.
///
/// Requires a mapping, but is otherwise forgiving about the values inside
/// it: each of the four trait keys is coerced to an integer — real numbers,
/// numeric strings like `"7"` — and anything uncoercible (null, prose,
/// absence) defaults to 0. The service scoring a trait sloppily should bias
/// the profile, not fail the whole analysis.
///
/// `alignment` is copied through when present as a string and omitted
/// otherwise.
pub fn parse_trait_profile(value: &Value) -> Result<TraitProfile, RecoveryError> {
    let obj = as_object(value, "profile").map_err(|violation| RecoveryError::Schema {
        violation,
        value: value.clone(),
    })?;

    let mut stats = TraitScores::default();
    for key in TraitKey::CANONICAL {
        let score = obj.get(key.as_str()).and_then(coerce_int).unwrap_or(0);
        stats.set(key, score);
    }

    let alignment = obj
        .get("alignment")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(TraitProfile { stats, alignment })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_strings_and_defaults_nulls() {
        let value = json!({"bravery": "7", "empathy": null, "curiosity": 5, "logic": 3});
        let profile = parse_trait_profile(&value).unwrap();
        assert_eq!(profile.stats, TraitScores::new(7, 0, 5, 3));
        assert_eq!(profile.alignment, None);
    }

    #[test]
    fn missing_keys_default_to_zero() {
        let profile = parse_trait_profile(&json!({"bravery": 9})).unwrap();
        assert_eq!(profile.stats, TraitScores::new(9, 0, 0, 0));
    }

    #[test]
    fn alignment_is_copied_through() {
        let value = json!({
            "bravery": 4, "empathy": 6, "curiosity": 2, "logic": 8,
            "alignment": "chaotic neutral",
        });
        let profile = parse_trait_profile(&value).unwrap();
        assert_eq!(profile.alignment.as_deref(), Some("chaotic neutral"));
    }

    #[test]
    fn non_string_alignment_is_omitted() {
        let value = json!({"bravery": 1, "alignment": 42});
        let profile = parse_trait_profile(&value).unwrap();
        assert_eq!(profile.alignment, None);
    }

    #[test]
    fn float_scores_truncate_toward_zero() {
        let value = json!({"bravery": 7.9, "empathy": -1.2, "curiosity": 0, "logic": 0});
        let profile = parse_trait_profile(&value).unwrap();
        assert_eq!(profile.stats.bravery, 7);
        assert_eq!(profile.stats.empathy, -1);
    }

    #[test]
    fn non_mapping_is_schema_error() {
        let err = parse_trait_profile(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), "schema_error");
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn serializes_flat_like_the_wire_shape() {
        let value = json!({
            "bravery": 4, "empathy": 6, "curiosity": 2, "logic": 8,
            "alignment": "lawful good",
        });
        let profile = parse_trait_profile(&value).unwrap();
        assert_eq!(serde_json::to_value(&profile).unwrap(), value);
    }
}
