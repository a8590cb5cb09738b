//! Quiz subdomain: personality questions and moral-dilemma quiz sets.
//!
//! Two response kinds live here, with deliberately different validation
//! temperaments:
//!
//! - [`entities::QuestionList`] — lenient: extra or junk entries are
//!   tolerated as long as three usable questions survive filtering.
//! - [`entities::QuizSet`] — strict: downstream consumers bind option
//!   identifiers by position, so any deviation rejects the whole set rather
//!   than risk silent re-indexing.

pub mod entities;
pub mod parser;
