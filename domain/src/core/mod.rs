//! Core domain concepts shared across all subdomains.
//!
//! - [`trait_key::TraitKey`] — the four scored personality traits
//! - [`trait_key::TraitScores`] — one integer score per trait
//! - [`error::RecoveryError`] — the failure taxonomy for response recovery

pub mod error;
pub mod trait_key;
