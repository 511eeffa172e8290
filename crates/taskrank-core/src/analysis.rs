//! One-call analysis: score every task, rank them, pick suggestions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ranking::{self, Suggestion};
use crate::scoring::{self, ScoredTask};
use crate::strategy::{self, Strategy};
use crate::task::Task;

/// Ranked result of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(deserialize_with = "strategy::deserialize_lenient")]
    pub strategy_used: Strategy,
    pub reference_date: NaiveDate,
    pub tasks: Vec<ScoredTask>,
    pub total_tasks: usize,
    pub message: String,
}

/// Top picks plus a summary line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionReport {
    #[serde(deserialize_with = "strategy::deserialize_lenient")]
    pub strategy_used: Strategy,
    pub suggested_tasks: Vec<Suggestion>,
    pub explanation: String,
    pub total_tasks_analyzed: usize,
}

/// Scores and ranks task lists under a fixed strategy and reference date.
///
/// Holds no mutable state, so one analyzer can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analyzer {
    strategy: Strategy,
    reference_date: NaiveDate,
}

impl Analyzer {
    pub fn new(strategy: Strategy, reference_date: NaiveDate) -> Self {
        Self {
            strategy,
            reference_date,
        }
    }

    /// Score every task, preserving input order.
    pub fn score_all(&self, tasks: &[Task]) -> Vec<ScoredTask> {
        let weights = self.strategy.weights();
        tasks
            .iter()
            .map(|task| scoring::score(task, self.reference_date, &weights))
            .collect()
    }

    /// Score and rank.
    pub fn analyze(&self, tasks: &[Task]) -> Analysis {
        let ranked = ranking::rank(self.score_all(tasks));
        let total_tasks = ranked.len();

        tracing::debug!(
            strategy = %self.strategy,
            reference_date = %self.reference_date,
            total_tasks,
            "analyzed tasks"
        );

        Analysis {
            strategy_used: self.strategy,
            reference_date: self.reference_date,
            message: format!(
                "Successfully analyzed {total_tasks} tasks using {} strategy",
                self.strategy
            ),
            tasks: ranked,
            total_tasks,
        }
    }

    /// Score, rank and keep the first `n`, each with a reason.
    pub fn suggest(&self, tasks: &[Task], n: usize) -> SuggestionReport {
        let ranked = ranking::rank(self.score_all(tasks));
        let suggested_tasks = ranking::suggestions(&ranked, n);

        let explanation = if tasks.is_empty() {
            "No tasks provided for suggestions".to_string()
        } else {
            format!(
                "Top {} tasks recommended based on urgency, importance, effort, and dependencies",
                suggested_tasks.len()
            )
        };

        tracing::debug!(
            strategy = %self.strategy,
            requested = n,
            returned = suggested_tasks.len(),
            "generated suggestions"
        );

        SuggestionReport {
            strategy_used: self.strategy,
            suggested_tasks,
            explanation,
            total_tasks_analyzed: tasks.len(),
        }
    }
}
