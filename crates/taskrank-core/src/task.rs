//! Task records and the input validation that guards the scorer.
//!
//! [`Task`] is the validated, immutable input to scoring. [`TaskInput`] is the
//! lenient shape accepted from manual entry and JSON imports: every field is
//! optional and unknown fields (such as a previous run's `priority_score`)
//! are ignored, so already-scored records can be fed straight back in.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, ValidationError};

/// Wire format for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    /// 1 (low) to 10 (high)
    pub importance: u8,
    /// 1-based positions of other tasks in the same list. Not checked for existence.
    #[serde(default)]
    pub dependencies: BTreeSet<u32>,
}

impl Task {
    /// Create a task with no dependencies.
    pub fn new(
        title: impl Into<String>,
        due_date: NaiveDate,
        estimated_hours: f64,
        importance: u8,
    ) -> Self {
        Self {
            title: title.into(),
            due_date,
            estimated_hours,
            importance,
            dependencies: BTreeSet::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = u32>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// Unvalidated task record as supplied by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// Also accepts whole-valued floats (`5.0`) and numeric strings (`"5"`).
    #[serde(default, deserialize_with = "deserialize_whole_number")]
    pub importance: Option<i64>,
    #[serde(default)]
    pub dependencies: Option<Vec<u32>>,
}

impl TaskInput {
    /// Validate into a [`Task`].
    ///
    /// `position` is the 1-based index of the record, used in error messages.
    pub fn validate(&self, position: usize) -> Result<Task, ValidationError> {
        let (Some(title), Some(due_date), Some(hours), Some(importance)) = (
            self.title.as_deref(),
            self.due_date.as_deref(),
            self.estimated_hours,
            self.importance,
        ) else {
            return Err(ValidationError::MissingFields { position });
        };

        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::invalid(position, "title", "title is required"));
        }

        let due_date = NaiveDate::parse_from_str(due_date.trim(), DATE_FORMAT).map_err(|e| {
            ValidationError::invalid(
                position,
                "due_date",
                format!("expected YYYY-MM-DD, got '{due_date}' ({e})"),
            )
        })?;

        if !hours.is_finite() || hours <= 0.0 {
            return Err(ValidationError::invalid(
                position,
                "estimated_hours",
                format!("must be a positive number, got {hours}"),
            ));
        }

        if !(1..=10).contains(&importance) {
            return Err(ValidationError::invalid(
                position,
                "importance",
                format!("must be between 1 and 10, got {importance}"),
            ));
        }

        Ok(Task {
            title: title.to_string(),
            due_date,
            estimated_hours: hours,
            importance: importance as u8,
            dependencies: self
                .dependencies
                .iter()
                .flatten()
                .copied()
                .collect(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WholeNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(raw) = Option::<WholeNumber>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value = match raw {
        WholeNumber::Int(n) => return Ok(Some(n)),
        WholeNumber::Float(f) => f,
        WholeNumber::Text(text) => {
            let text = text.trim();
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Some(n));
            }
            text.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("expected a whole number, got '{text}'")))?
        }
    };
    if value.is_finite() && value.fract() == 0.0 {
        Ok(Some(value as i64))
    } else {
        Err(D::Error::custom(format!("expected a whole number, got {value}")))
    }
}

/// Result of a bulk JSON import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTasks {
    pub tasks: Vec<Task>,
    /// Strategy named by an object-form payload, if any.
    pub strategy: Option<String>,
}

/// Parse a pasted JSON payload.
///
/// Accepts either a bare array of task records or an object of the form
/// `{"tasks": [...], "strategy": "..."}`. An object without `tasks` imports
/// nothing.
pub fn parse_tasks_json(text: &str) -> Result<ImportedTasks> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    let (records, strategy) = match value {
        serde_json::Value::Array(items) => (items, None),
        serde_json::Value::Object(mut map) => {
            let strategy = map
                .get("strategy")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned);
            let items = match map.remove("tasks") {
                Some(serde_json::Value::Array(items)) => items,
                None => Vec::new(),
                Some(_) => return Err(ValidationError::UnexpectedShape.into()),
            };
            (items, strategy)
        }
        _ => return Err(ValidationError::UnexpectedShape.into()),
    };

    let mut tasks = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        let position = i + 1;
        if !record.is_object() {
            return Err(ValidationError::MissingFields { position }.into());
        }
        let input: TaskInput = serde_json::from_value(record)
            .map_err(|e| ValidationError::invalid(position, "record", e.to_string()))?;
        tasks.push(input.validate(position)?);
    }

    tracing::debug!(count = tasks.len(), strategy = ?strategy, "imported tasks from json");
    Ok(ImportedTasks { tasks, strategy })
}
