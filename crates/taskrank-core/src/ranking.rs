//! Ordering scored tasks and picking what to start next.

use serde::{Deserialize, Serialize};

use crate::scoring::ScoredTask;

/// How many tasks `suggest` returns when the caller has no preference.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Sort by `priority_score`, highest first.
///
/// The sort is stable: tasks with equal scores keep their input order.
pub fn rank(mut tasks: Vec<ScoredTask>) -> Vec<ScoredTask> {
    tasks.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
    tasks
}

/// First `n` tasks of an already ranked sequence.
pub fn suggest(ranked: &[ScoredTask], n: usize) -> Vec<ScoredTask> {
    ranked.iter().take(n).cloned().collect()
}

/// A suggested task with its position and a short reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// 1-based
    pub rank: usize,
    #[serde(flatten)]
    pub task: ScoredTask,
    pub suggestion_reason: String,
}

/// Label the top `n` ranked tasks with a "why start this" reason.
///
/// Reasons describe the existing order; they never change it.
pub fn suggestions(ranked: &[ScoredTask], n: usize) -> Vec<Suggestion> {
    suggest(ranked, n)
        .into_iter()
        .enumerate()
        .map(|(i, task)| {
            let rank = i + 1;
            let suggestion_reason = suggestion_reason(&task, rank);
            Suggestion {
                rank,
                task,
                suggestion_reason,
            }
        })
        .collect()
}

fn suggestion_reason(task: &ScoredTask, rank: usize) -> String {
    let reasons: Vec<&str> = task
        .component_scores
        .dominant()
        .map(|c| c.suggestion_phrase())
        .collect();

    if reasons.is_empty() {
        format!("Priority #{rank}: balanced priority score")
    } else {
        format!("Priority #{rank}: {}", reasons.join(", "))
    }
}
