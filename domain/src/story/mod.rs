//! Story subdomain: narrative nodes and alternate-start scenarios.

pub mod entities;
pub mod parser;
