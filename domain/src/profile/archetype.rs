//! The archetype table and classifier.

use crate::core::trait_key::{TraitKey, TraitScores};
use crate::profile::entities::ArchetypeResult;
use serde::{Deserialize, Serialize};

/// The twelve player archetypes (Value Object).
///
/// An archetype is selected by the player's two highest-ranked traits, in
/// order. The table is directional: Champion (bravery then empathy) and
/// Guardian (empathy then bravery) are different characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Bravery + Empathy — righteous protector, leads with the heart.
    Champion,
    /// Bravery + Curiosity — adventurous risk-taker, bold explorer.
    Trailblazer,
    /// Bravery + Logic — stoic tactician, firm and calculating.
    Ironmind,
    /// Empathy + Bravery — selfless defender, grounded caregiver.
    Guardian,
    /// Empathy + Curiosity — idealist, inspired by what could be.
    Dreamweaver,
    /// Empathy + Logic — diplomat, bridge between minds.
    Mediator,
    /// Curiosity + Bravery — restless adventurer, seeks novelty.
    Wanderer,
    /// Curiosity + Empathy — gentle visionary, connects with the unknown.
    Seeker,
    /// Curiosity + Logic — inventor, loves building and breaking.
    Tinker,
    /// Logic + Bravery — cold commander, thrives under pressure.
    Strategist,
    /// Logic + Empathy — moral thinker, values truth and harmony.
    Philosopher,
    /// Logic + Curiosity — world-builder, system shaper.
    Architect,
    /// Fallback for a pair not in the table. Unreachable while the trait
    /// set is fixed at four — every ordered pair of distinct traits has an
    /// entry — but would become reachable if trait keys were ever added.
    Unknown,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Champion => "Champion",
            Archetype::Trailblazer => "Trailblazer",
            Archetype::Ironmind => "Ironmind",
            Archetype::Guardian => "Guardian",
            Archetype::Dreamweaver => "Dreamweaver",
            Archetype::Mediator => "Mediator",
            Archetype::Wanderer => "Wanderer",
            Archetype::Seeker => "Seeker",
            Archetype::Tinker => "Tinker",
            Archetype::Strategist => "Strategist",
            Archetype::Philosopher => "Philosopher",
            Archetype::Architect => "Architect",
            Archetype::Unknown => "Unknown",
        }
    }

    /// Look up the archetype for an ordered `(primary, secondary)` pair.
    ///
    /// This match is the single canonical copy of the table.
    pub fn from_pair(primary: TraitKey, secondary: TraitKey) -> Archetype {
        use TraitKey::*;
        match (primary, secondary) {
            (Bravery, Empathy) => Archetype::Champion,
            (Bravery, Curiosity) => Archetype::Trailblazer,
            (Bravery, Logic) => Archetype::Ironmind,
            (Empathy, Bravery) => Archetype::Guardian,
            (Empathy, Curiosity) => Archetype::Dreamweaver,
            (Empathy, Logic) => Archetype::Mediator,
            (Curiosity, Bravery) => Archetype::Wanderer,
            (Curiosity, Empathy) => Archetype::Seeker,
            (Curiosity, Logic) => Archetype::Tinker,
            (Logic, Bravery) => Archetype::Strategist,
            (Logic, Empathy) => Archetype::Philosopher,
            (Logic, Curiosity) => Archetype::Architect,
            // Equal primary and secondary cannot come out of a ranking
            _ => Archetype::Unknown,
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a set of trait scores into an archetype.
///
/// Total and deterministic: ranks the four scores highest-first with a
/// stable sort over the canonical key order `bravery, empathy, curiosity,
/// logic`, takes the top two traits as the ordered `(primary, secondary)`
/// pair, and looks the pair up in the archetype table.
///
/// Tie-break convention: traits sharing a score resolve in canonical key
/// order, so a fully tied profile classifies as `(bravery, empathy)` →
/// Champion. This is a deliberate, documented decision — the deterministic
/// reading of an otherwise ambiguous ranking.
pub fn classify(scores: &TraitScores) -> ArchetypeResult {
    let ranked = scores.ranked();
    let (primary, _) = ranked[0];
    let (secondary, _) = ranked[1];
    ArchetypeResult {
        archetype: Archetype::from_pair(primary, secondary),
        primary,
        secondary,
        stats: *scores,
    }
}
