//! Trait vocabulary: the four scored personality dimensions.

use serde::{Deserialize, Serialize};

/// One of the four personality traits a player is scored on (Value Object).
///
/// The declaration order is canonical: it is the order trait keys appear in
/// prompts and payloads, and it is the tie-break order when two traits share
/// the same score (see [`classify`](crate::profile::archetype::classify)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKey {
    Bravery,
    Empathy,
    Curiosity,
    Logic,
}

impl TraitKey {
    /// All four traits, in canonical order.
    pub const CANONICAL: [TraitKey; 4] = [
        TraitKey::Bravery,
        TraitKey::Empathy,
        TraitKey::Curiosity,
        TraitKey::Logic,
    ];

    /// The key string used in wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            TraitKey::Bravery => "bravery",
            TraitKey::Empathy => "empathy",
            TraitKey::Curiosity => "curiosity",
            TraitKey::Logic => "logic",
        }
    }
}

impl std::fmt::Display for TraitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four coerced integer trait scores (Value Object).
///
/// Always fully populated: coercion defaults a missing or non-numeric score
/// to 0, so no score is ever a string, float, or absent once a profile has
/// been validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    pub bravery: i64,
    pub empathy: i64,
    pub curiosity: i64,
    pub logic: i64,
}

impl TraitScores {
    pub fn new(bravery: i64, empathy: i64, curiosity: i64, logic: i64) -> Self {
        Self {
            bravery,
            empathy,
            curiosity,
            logic,
        }
    }

    /// Get the score for a trait.
    pub fn get(&self, key: TraitKey) -> i64 {
        match key {
            TraitKey::Bravery => self.bravery,
            TraitKey::Empathy => self.empathy,
            TraitKey::Curiosity => self.curiosity,
            TraitKey::Logic => self.logic,
        }
    }

    /// Set the score for a trait.
    pub fn set(&mut self, key: TraitKey, value: i64) {
        match key {
            TraitKey::Bravery => self.bravery = value,
            TraitKey::Empathy => self.empathy = value,
            TraitKey::Curiosity => self.curiosity = value,
            TraitKey::Logic => self.logic = value,
        }
    }

    /// Iterate `(key, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKey, i64)> + '_ {
        TraitKey::CANONICAL.into_iter().map(|k| (k, self.get(k)))
    }

    /// All four traits ranked by score, highest first.
    ///
    /// The sort is stable over canonical order, so equal scores keep their
    /// canonical relative order. That makes the ranking — and everything
    /// derived from it — deterministic for tied profiles.
    pub fn ranked(&self) -> [(TraitKey, i64); 4] {
        let mut pairs = [
            (TraitKey::Bravery, self.bravery),
            (TraitKey::Empathy, self.empathy),
            (TraitKey::Curiosity, self.curiosity),
            (TraitKey::Logic, self.logic),
        ];
        // sort_by is stable; descending by score
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_fixed() {
        let keys: Vec<&str> = TraitKey::CANONICAL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["bravery", "empathy", "curiosity", "logic"]);
    }

    #[test]
    fn get_set_roundtrip() {
        let mut scores = TraitScores::default();
        for (i, key) in TraitKey::CANONICAL.into_iter().enumerate() {
            scores.set(key, i as i64 + 1);
        }
        assert_eq!(scores, TraitScores::new(1, 2, 3, 4));
        assert_eq!(scores.get(TraitKey::Curiosity), 3);
    }

    #[test]
    fn ranked_sorts_descending() {
        let scores = TraitScores::new(2, 9, 5, 7);
        let ranked = scores.ranked();
        assert_eq!(ranked[0], (TraitKey::Empathy, 9));
        assert_eq!(ranked[1], (TraitKey::Logic, 7));
        assert_eq!(ranked[2], (TraitKey::Curiosity, 5));
        assert_eq!(ranked[3], (TraitKey::Bravery, 2));
    }

    #[test]
    fn ranked_ties_keep_canonical_order() {
        let scores = TraitScores::new(5, 5, 5, 5);
        let ranked = scores.ranked();
        let keys: Vec<TraitKey> = ranked.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, TraitKey::CANONICAL.to_vec());
    }

    #[test]
    fn serializes_with_lowercase_keys() {
        let json = serde_json::to_value(TraitKey::Bravery).unwrap();
        assert_eq!(json, serde_json::json!("bravery"));
    }
}
