//! Reply recovery: turning raw service text into a JSON value.
//!
//! The generation service is asked for raw JSON but routinely wraps it in
//! markdown fences, serializes it as a JSON *string*, or drops a comma.
//! This module owns the repair and parse stages; shape validation belongs to
//! the per-kind parsers in [`quiz`](crate::quiz), [`profile`](crate::profile)
//! and [`story`](crate::story).
//!
//! | Stage | Function | Fails? |
//! |-------|----------|--------|
//! | Repair | [`normalize::normalize`] | never (best effort) |
//! | Parse  | [`decode::decode`]       | `Decode` |

pub mod decode;
pub mod normalize;
pub(crate) mod shape;
