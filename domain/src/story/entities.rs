//! Story entities.

use serde::Serialize;

/// Identifier of the node a choice leads to.
///
/// The service is allowed to hand back either a numeric index into the
/// quest tree or a symbolic node name; both are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NextId {
    Number(i64),
    Name(String),
}

/// One player choice on a narrative node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Choice text shown to the player.
    pub text: String,
    /// Where the choice leads.
    pub next: NextId,
    /// Trait label the choice exercises, when the node is a stat gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<String>,
}

/// A generated narrative node with exactly two choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotNode {
    pub title: String,
    pub summary: String,
    pub narration: String,
    pub choices: Vec<Choice>,
}

impl PlotNode {
    /// Expected number of choices per node.
    pub const CHOICE_COUNT: usize = 2;
}

/// A randomized starting scenario for a new character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateStart {
    pub time_period: String,
    pub location: String,
    pub role: String,
    pub situation: String,
}
