//! Action result, per-member outcomes, and the output sink.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::TeamRole;

/// Fallback text for a failure that carried no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedMember {
    pub username: String,
    pub role: TeamRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedMember {
    pub username: String,
    pub role: TeamRole,
    pub error: String,
}

/// Outcome of one membership grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberOutcome {
    Added(AddedMember),
    Failed(FailedMember),
}

/// Split outcomes into (added, failed), keeping input order within each.
pub fn partition_outcomes(
    outcomes: impl IntoIterator<Item = MemberOutcome>,
) -> (Vec<AddedMember>, Vec<FailedMember>) {
    let mut added = Vec::new();
    let mut failed = Vec::new();
    for outcome in outcomes {
        match outcome {
            MemberOutcome::Added(m) => added.push(m),
            MemberOutcome::Failed(m) => failed.push(m),
        }
    }
    (added, failed)
}

/// The sole observable output of a successful invocation.
///
/// Field order is the emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub team_id: u64,
    pub team_url: String,
    pub team_slug: String,
    pub members_added: Vec<AddedMember>,
    pub members_failed: Vec<FailedMember>,
}

/// Receives named outputs from an action, one call per output.
pub trait ActionOutput {
    fn output(&mut self, name: &str, value: Value);
}

impl ActionResult {
    /// Emit all five outputs in fixed order. Empty lists are still emitted.
    pub fn emit(&self, out: &mut dyn ActionOutput) {
        out.output("teamId", Value::from(self.team_id));
        out.output("teamUrl", Value::from(self.team_url.clone()));
        out.output("teamSlug", Value::from(self.team_slug.clone()));
        out.output("membersAdded", to_value(&self.members_added));
        out.output("membersFailed", to_value(&self.members_failed));
    }
}

fn to_value<T: Serialize>(items: &[T]) -> Value {
    serde_json::to_value(items).unwrap_or_else(|_| Value::Array(Vec::new()))
}

/// In-memory sink that keeps outputs in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordedOutput {
    entries: Vec<(String, Value)>,
}

impl RecordedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }
}

impl ActionOutput for RecordedOutput {
    fn output(&mut self, name: &str, value: Value) {
        self.entries.push((name.to_string(), value));
    }
}
