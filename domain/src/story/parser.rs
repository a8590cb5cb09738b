//! Parsers for the story response kinds.

use crate::core::error::{RecoveryError, SchemaViolation};
use crate::reply::shape::{as_array, as_object, str_field};
use crate::story::entities::{AlternateStart, Choice, NextId, PlotNode};
use serde_json::Value;

/// Recover a [`PlotNode`] from a decoded value.
///
/// Strict: `title`, `summary` and `narration` must be strings and `choices`
/// must hold exactly two entries, each with choice `text` and a `next`
/// identifier (numeric or string). `stat` is optional per choice.
pub fn parse_plot_node(value: &Value) -> Result<PlotNode, RecoveryError> {
    parse_plot_node_inner(value).map_err(|violation| RecoveryError::Schema {
        violation,
        value: value.clone(),
    })
}

fn parse_plot_node_inner(value: &Value) -> Result<PlotNode, SchemaViolation> {
    let obj = as_object(value, "node")?;

    let title = str_field(obj, "title", "node")?.to_string();
    let summary = str_field(obj, "summary", "node")?.to_string();
    let narration = str_field(obj, "narration", "node")?.to_string();

    let choices_value = obj
        .get("choices")
        .ok_or_else(|| SchemaViolation::missing_key("node", "choices"))?;
    let choices = as_array(choices_value, "node.choices")?;
    if choices.len() != PlotNode::CHOICE_COUNT {
        return Err(SchemaViolation::wrong_arity(
            "node.choices",
            PlotNode::CHOICE_COUNT,
            choices.len(),
        ));
    }

    let choices = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| parse_choice(choice, &format!("node.choices[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlotNode {
        title,
        summary,
        narration,
        choices,
    })
}

fn parse_choice(value: &Value, path: &str) -> Result<Choice, SchemaViolation> {
    let obj = as_object(value, path)?;

    let text = str_field(obj, "text", path)?.to_string();

    let next_value = obj
        .get("next")
        .ok_or_else(|| SchemaViolation::missing_key(path, "next"))?;
    let next = match next_value {
        Value::Number(n) => n
            .as_i64()
            .map(NextId::Number)
            .ok_or_else(|| SchemaViolation::wrong_type(format!("{path}.next"), "an integer id"))?,
        Value::String(s) => NextId::Name(s.clone()),
        _ => {
            return Err(SchemaViolation::wrong_type(
                format!("{path}.next"),
                "a numeric or string id",
            ));
        }
    };

    let stat = match obj.get("stat") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(SchemaViolation::wrong_type(
                format!("{path}.stat"),
                "a string",
            ));
        }
    };

    Ok(Choice { text, next, stat })
}

/// Recover an [`AlternateStart`] from a decoded value.
///
/// Strict: all four fields are required strings.
pub fn parse_alternate_start(value: &Value) -> Result<AlternateStart, RecoveryError> {
    parse_alternate_start_inner(value).map_err(|violation| RecoveryError::Schema {
        violation,
        value: value.clone(),
    })
}

fn parse_alternate_start_inner(value: &Value) -> Result<AlternateStart, SchemaViolation> {
    let obj = as_object(value, "start")?;
    Ok(AlternateStart {
        time_period: str_field(obj, "time_period", "start")?.to_string(),
        location: str_field(obj, "location", "start")?.to_string(),
        role: str_field(obj, "role", "start")?.to_string(),
        situation: str_field(obj, "situation", "start")?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_node() -> Value {
        json!({
            "title": "First Obstacle",
            "summary": "A collapsed bridge blocks the mountain pass.",
            "narration": "Wind howls through the gorge as you reach the edge.",
            "choices": [
                {"text": "Confront it.", "next": 2, "stat": "Bravery"},
                {"text": "Find another way.", "next": "detour", "stat": null},
            ],
        })
    }

    // ==================== PlotNode ====================

    #[test]
    fn accepts_a_valid_node() {
        let node = parse_plot_node(&valid_node()).unwrap();
        assert_eq!(node.title, "First Obstacle");
        assert_eq!(node.choices.len(), 2);
        assert_eq!(node.choices[0].next, NextId::Number(2));
        assert_eq!(node.choices[0].stat.as_deref(), Some("Bravery"));
        assert_eq!(node.choices[1].next, NextId::Name("detour".into()));
        assert_eq!(node.choices[1].stat, None);
    }

    #[test]
    fn stat_is_optional() {
        let mut node = valid_node();
        node["choices"][0].as_object_mut().unwrap().remove("stat");
        let parsed = parse_plot_node(&node).unwrap();
        assert_eq!(parsed.choices[0].stat, None);
    }

    #[test]
    fn missing_narration_is_rejected() {
        let mut node = valid_node();
        node.as_object_mut().unwrap().remove("narration");
        let err = parse_plot_node(&node).unwrap_err();
        assert!(err.to_string().contains("`narration`"));
    }

    #[test]
    fn wrong_choice_count_is_rejected() {
        let mut node = valid_node();
        node["choices"].as_array_mut().unwrap().pop();
        let err = parse_plot_node(&node).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn boolean_next_is_rejected() {
        let mut node = valid_node();
        node["choices"][1]["next"] = json!(true);
        let err = parse_plot_node(&node).unwrap_err();
        assert!(err.to_string().contains("numeric or string id"));
    }

    #[test]
    fn next_id_serializes_untagged() {
        let node = parse_plot_node(&valid_node()).unwrap();
        let out = serde_json::to_value(&node.choices).unwrap();
        assert_eq!(out[0]["next"], json!(2));
        assert_eq!(out[1]["next"], json!("detour"));
    }

    // ==================== AlternateStart ====================

    #[test]
    fn accepts_a_valid_start() {
        let value = json!({
            "time_period": "1347 CE",
            "location": "A plague-quarantined harbor town",
            "role": "Apprentice bellfounder",
            "situation": "The quarantine chain snapped in the night.",
        });
        let start = parse_alternate_start(&value).unwrap();
        assert_eq!(start.role, "Apprentice bellfounder");
    }

    #[test]
    fn missing_field_names_the_key() {
        let value = json!({
            "time_period": "2250",
            "location": "Orbital shipyard",
            "situation": "The dock has gone silent.",
        });
        let err = parse_alternate_start(&value).unwrap_err();
        assert_eq!(err.kind(), "schema_error");
        assert!(err.to_string().contains("`role`"));
    }
}
