//! Replays scripted operations against a table. Rejected operations are
//! recorded in their outcome and the replay carries on.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, Script};
use crate::table::Hashtable;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Insert { key: String, value: i64 },
    Update { key: String, value: i64 },
    Delete { key: String },
    Get { key: String },
    Exists { key: String },
}

/// Result of one replayed operation, shaped for JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Outcome {
    pub op: &'static str,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Insert { .. } => "insert",
            Operation::Update { .. } => "update",
            Operation::Delete { .. } => "delete",
            Operation::Get { .. } => "get",
            Operation::Exists { .. } => "exists",
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Operation::Insert { key, .. }
            | Operation::Update { key, .. }
            | Operation::Delete { key }
            | Operation::Get { key }
            | Operation::Exists { key } => key,
        }
    }

    pub fn apply(&self, table: &mut Hashtable) -> Outcome {
        let mut outcome = Outcome {
            op: self.name(),
            key: self.key().to_owned(),
            value: None,
            exists: None,
            error: None,
        };

        let result = match self {
            Operation::Insert { key, value } => table.insert(key, *value),
            Operation::Update { key, value } => table.update(key, *value),
            Operation::Delete { key } => table.delete(key),
            Operation::Get { key } => table.get(key).map(|value| {
                outcome.value = Some(value);
            }),
            Operation::Exists { key } => {
                outcome.exists = Some(table.exists(key));
                Ok(())
            }
        };

        if let Err(err) = result {
            outcome.error = Some(format!("{err}"));
        }
        outcome
    }
}

/// Seeds a table from the script and replays its operations in order.
pub fn run(script: &Script) -> Result<Vec<Outcome>, ConfigError> {
    let mut table = script.build_table()?;
    info!(
        "replaying {} operations over {} seed entries",
        script.operations.len(),
        script.seed.len()
    );

    let outcomes: Vec<Outcome> = script
        .operations
        .iter()
        .map(|op| op.apply(&mut table))
        .collect();

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    info!("replay finished, {failed} operations rejected");
    Ok(outcomes)
}
