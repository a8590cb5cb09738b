//! Parsers for the quiz response kinds.

use crate::core::error::{RecoveryError, SchemaViolation};
use crate::core::trait_key::{TraitKey, TraitScores};
use crate::quiz::entities::{QuestionList, QuizOption, QuizQuestion, QuizSet};
use crate::reply::shape::{as_array, as_object, str_field};
use serde_json::Value;

/// Recover a [`QuestionList`] from a decoded value.
///
/// Lenient by design: non-string entries and strings of 20 trimmed
/// characters or fewer are dropped in a single filtering pass, and the first
/// three survivors are kept in their original order. Fails only when fewer
/// than three usable questions remain — never pads, never invents.
pub fn parse_question_list(value: &Value) -> Result<QuestionList, RecoveryError> {
    parse_question_list_inner(value).map_err(|violation| RecoveryError::Schema {
        violation,
        value: value.clone(),
    })
}

fn parse_question_list_inner(value: &Value) -> Result<QuestionList, SchemaViolation> {
    let items = as_array(value, "questions")?;

    let usable: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| s.chars().count() > QuestionList::MIN_CHARS)
        .map(str::to_string)
        .collect();

    if usable.len() < QuestionList::COUNT {
        return Err(SchemaViolation::wrong_arity(
            "questions",
            QuestionList::COUNT,
            usable.len(),
        ));
    }

    let mut kept = usable;
    kept.truncate(QuestionList::COUNT);
    Ok(QuestionList::new(kept))
}

/// Recover a [`QuizSet`] from a decoded value.
///
/// Strict: exactly five questions, each with a non-empty `question` string
/// and exactly four options; each option carries `label`, `name`, and a
/// `value` mapping with exactly the four trait keys, every score an integer
/// in [-3, 3]. Any deviation rejects the whole set — downstream consumers
/// bind option identifiers by position and cannot tolerate re-indexing.
pub fn parse_quiz_set(value: &Value) -> Result<QuizSet, RecoveryError> {
    parse_quiz_set_inner(value).map_err(|violation| RecoveryError::Schema {
        violation,
        value: value.clone(),
    })
}

fn parse_quiz_set_inner(value: &Value) -> Result<QuizSet, SchemaViolation> {
    let items = as_array(value, "quiz")?;
    if items.len() != QuizSet::COUNT {
        return Err(SchemaViolation::wrong_arity(
            "quiz",
            QuizSet::COUNT,
            items.len(),
        ));
    }

    let mut questions = Vec::with_capacity(QuizSet::COUNT);
    for (i, item) in items.iter().enumerate() {
        questions.push(parse_quiz_question(item, &format!("[{i}]"))?);
    }
    Ok(QuizSet::new(questions))
}

fn parse_quiz_question(value: &Value, path: &str) -> Result<QuizQuestion, SchemaViolation> {
    let obj = as_object(value, path)?;

    let question = str_field(obj, "question", path)?;
    if question.trim().is_empty() {
        return Err(SchemaViolation::wrong_type(
            format!("{path}.question"),
            "a non-empty string",
        ));
    }

    let options_path = format!("{path}.options");
    let options_value = obj
        .get("options")
        .ok_or_else(|| SchemaViolation::missing_key(path, "options"))?;
    let options = as_array(options_value, &options_path)?;
    if options.len() != QuizQuestion::OPTION_COUNT {
        return Err(SchemaViolation::wrong_arity(
            options_path,
            QuizQuestion::OPTION_COUNT,
            options.len(),
        ));
    }

    let options = options
        .iter()
        .enumerate()
        .map(|(i, opt)| parse_quiz_option(opt, &format!("{path}.options[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuizQuestion {
        question: question.to_string(),
        options,
    })
}

fn parse_quiz_option(value: &Value, path: &str) -> Result<QuizOption, SchemaViolation> {
    let obj = as_object(value, path)?;

    let label = str_field(obj, "label", path)?.to_string();
    let name = str_field(obj, "name", path)?.to_string();

    let value_path = format!("{path}.value");
    let deltas_value = obj
        .get("value")
        .ok_or_else(|| SchemaViolation::missing_key(path, "value"))?;
    let deltas = as_object(deltas_value, &value_path)?;

    let mut scores = TraitScores::default();
    for key in TraitKey::CANONICAL {
        let raw = deltas
            .get(key.as_str())
            .ok_or_else(|| SchemaViolation::missing_key(value_path.as_str(), key.as_str()))?;
        let score = raw.as_i64().ok_or_else(|| {
            SchemaViolation::wrong_type(format!("{value_path}.{key}"), "an integer")
        })?;
        if !(QuizOption::VALUE_MIN..=QuizOption::VALUE_MAX).contains(&score) {
            return Err(SchemaViolation::OutOfRange {
                path: format!("{value_path}.{key}"),
                value: score,
                min: QuizOption::VALUE_MIN,
                max: QuizOption::VALUE_MAX,
            });
        }
        scores.set(key, score);
    }

    // Exactly the four trait keys: anything extra is rejected, not ignored
    if deltas.len() != TraitKey::CANONICAL.len() {
        let extra = deltas
            .keys()
            .find(|k| !TraitKey::CANONICAL.iter().any(|t| t.as_str() == k.as_str()))
            .cloned()
            .unwrap_or_default();
        return Err(SchemaViolation::unexpected_key(value_path, extra));
    }

    Ok(QuizOption {
        label,
        name,
        value: scores,
    })
}
