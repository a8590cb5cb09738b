//! Profile subdomain: trait profiles and archetype classification.
//!
//! A validated [`entities::TraitProfile`] feeds
//! [`archetype::classify`], which is the only non-trivial pure computation
//! in the system: rank the four scores, take the top two traits in order,
//! and look the ordered pair up in the fixed archetype table.

pub mod archetype;
pub mod entities;
pub mod parser;
