//! Profile entities.

use crate::core::trait_key::{TraitKey, TraitScores};
use crate::profile::archetype::Archetype;
use serde::Serialize;

/// A player's validated trait profile.
///
/// Scores are always fully coerced integers; `alignment` is carried through
/// verbatim when the service provided one and omitted otherwise — it is
/// never defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitProfile {
    #[serde(flatten)]
    pub stats: TraitScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
}

/// The outcome of classifying a trait profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeResult {
    /// The matched archetype, or `Unknown` if the pair is not in the table.
    pub archetype: Archetype,
    /// Highest-ranked trait.
    pub primary: TraitKey,
    /// Second-highest-ranked trait.
    pub secondary: TraitKey,
    /// The coerced scores the ranking was computed from.
    pub stats: TraitScores,
}

/// A trait profile together with its classification — the full payload the
/// analyze flow hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileAnalysis {
    #[serde(flatten)]
    pub profile: TraitProfile,
    #[serde(flatten)]
    pub result: ArchetypeResult,
}

impl ProfileAnalysis {
    pub fn new(profile: TraitProfile, result: ArchetypeResult) -> Self {
        Self { profile, result }
    }
}
