//! Task scoring engine.
//!
//! Each task is reduced to four component scores in `[0, 1]`:
//!
//! | component | rule |
//! |-----------|------|
//! | urgency | overdue 1.0, today 0.9, tomorrow 0.8, ≤3 days 0.6, ≤7 days 0.4, later 0.2 |
//! | importance | `importance / 10` |
//! | effort | ≤1h 1.0, ≤4h 0.7, ≤8h 0.4, longer 0.2 |
//! | dependency | 0.8 when the task lists dependencies, else 0.3 |
//!
//! The priority score is the weighted sum of the components, clamped to
//! `[0, 1]`. Components strictly above [`REASON_THRESHOLD`] are named in the
//! explanation.
//!
//! Scoring is a pure function of the task, the reference date and the
//! weights. Nothing is cached between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::strategy::StrategyWeights;
use crate::task::Task;

/// A component must exceed this to be called out in explanations.
pub const REASON_THRESHOLD: f64 = 0.7;

const FALLBACK_EXPLANATION: &str = "This task has moderate priority across all factors";

/// One of the four scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Urgency,
    Importance,
    Effort,
    Dependency,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Urgency,
        Component::Importance,
        Component::Effort,
        Component::Dependency,
    ];

    /// Phrase used in a task's explanation.
    pub fn explanation_phrase(&self) -> &'static str {
        match self {
            Component::Urgency => "high urgency",
            Component::Importance => "high importance",
            Component::Effort => "quick win",
            Component::Dependency => "blocks other tasks",
        }
    }

    /// Phrase used in a suggestion's reason.
    pub fn suggestion_phrase(&self) -> &'static str {
        match self {
            Component::Urgency => "urgent deadline",
            Component::Importance => "high importance",
            Component::Effort => "quick win",
            Component::Dependency => "blocks other tasks",
        }
    }
}

/// Per-component breakdown, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Urgency => self.urgency,
            Component::Importance => self.importance,
            Component::Effort => self.effort,
            Component::Dependency => self.dependency,
        }
    }

    /// Components above [`REASON_THRESHOLD`], in table order.
    pub fn dominant(&self) -> impl Iterator<Item = Component> + '_ {
        Component::ALL
            .into_iter()
            .filter(move |c| self.get(*c) > REASON_THRESHOLD)
    }

    /// Weighted sum clamped to `[0, 1]`.
    pub fn combine(&self, weights: &StrategyWeights) -> f64 {
        let total = self.urgency * weights.urgency
            + self.importance * weights.importance
            + self.effort * weights.effort
            + self.dependency * weights.dependencies;
        total.clamp(0.0, 1.0)
    }
}

/// A task together with everything the scorer derived from it.
///
/// Serializes flat: the task's own fields followed by `component_scores`,
/// `priority_score` and `explanation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub component_scores: ComponentScores,
    pub priority_score: f64,
    pub explanation: String,
}

impl ScoredTask {
    pub fn priority_level(&self) -> PriorityLevel {
        PriorityLevel::from_score(self.priority_score)
    }
}

/// Coarse display bucket for a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            PriorityLevel::High
        } else if score >= 0.4 {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
        }
    }
}

/// Score one task against `reference_date` ("today") with the given weights.
pub fn score(task: &Task, reference_date: NaiveDate, weights: &StrategyWeights) -> ScoredTask {
    let components = ComponentScores {
        urgency: round_to(urgency_score(days_until_due(task.due_date, reference_date)), 2),
        importance: round_to(importance_score(task.importance), 2),
        effort: round_to(effort_score(task.estimated_hours), 2),
        dependency: round_to(dependency_score(task), 2),
    };

    let priority_score = round_to(components.combine(weights), 3);
    let explanation = explain(&components);

    ScoredTask {
        task: task.clone(),
        component_scores: components,
        priority_score,
        explanation,
    }
}

/// Whole calendar days from `reference_date` until `due_date`. Negative when overdue.
pub fn days_until_due(due_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (due_date - reference_date).num_days()
}

pub fn urgency_score(days_until_due: i64) -> f64 {
    match days_until_due {
        d if d < 0 => 1.0,
        0 => 0.9,
        1 => 0.8,
        2..=3 => 0.6,
        4..=7 => 0.4,
        _ => 0.2,
    }
}

pub fn importance_score(importance: u8) -> f64 {
    f64::from(importance) / 10.0
}

pub fn effort_score(estimated_hours: f64) -> f64 {
    if estimated_hours <= 1.0 {
        1.0
    } else if estimated_hours <= 4.0 {
        0.7
    } else if estimated_hours <= 8.0 {
        0.4
    } else {
        0.2
    }
}

/// Only looks at the task's own dependency list, not at who depends on it.
pub fn dependency_score(task: &Task) -> f64 {
    if task.has_dependencies() {
        0.8
    } else {
        0.3
    }
}

fn explain(components: &ComponentScores) -> String {
    let phrases: Vec<&str> = components
        .dominant()
        .map(|c| c.explanation_phrase())
        .collect();

    if phrases.is_empty() {
        FALLBACK_EXPLANATION.to_string()
    } else {
        format!("This task has {}", phrases.join(", "))
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn task_due_in(days: i64, hours: f64, importance: u8) -> Task {
        Task::new("Test Task", today() + Duration::days(days), hours, importance)
    }

    #[test]
    fn test_urgency_buckets() {
        assert_eq!(urgency_score(-30), 1.0);
        assert_eq!(urgency_score(-1), 1.0);
        assert_eq!(urgency_score(0), 0.9);
        assert_eq!(urgency_score(1), 0.8);
        assert_eq!(urgency_score(2), 0.6);
        assert_eq!(urgency_score(3), 0.6);
        assert_eq!(urgency_score(4), 0.4);
        assert_eq!(urgency_score(7), 0.4);
        assert_eq!(urgency_score(8), 0.2);
        assert_eq!(urgency_score(365), 0.2);
    }

    #[test]
    fn test_days_until_due_uses_calendar_days() {
        assert_eq!(days_until_due(today(), today()), 0);
        assert_eq!(days_until_due(today() + Duration::days(1), today()), 1);
        assert_eq!(days_until_due(today() - Duration::days(1), today()), -1);
    }

    #[test]
    fn test_importance_is_linear() {
        assert_eq!(importance_score(10), 1.0);
        assert_eq!(importance_score(5), 0.5);
        assert_eq!(importance_score(1), 0.1);
    }

    #[test]
    fn test_effort_buckets() {
        assert_eq!(effort_score(0.5), 1.0);
        assert_eq!(effort_score(1.0), 1.0);
        assert_eq!(effort_score(2.0), 0.7);
        assert_eq!(effort_score(4.0), 0.7);
        assert_eq!(effort_score(4.5), 0.4);
        assert_eq!(effort_score(8.0), 0.4);
        assert_eq!(effort_score(10.0), 0.2);
    }

    #[test]
    fn test_dependency_is_binary() {
        let plain = task_due_in(3, 2.0, 5);
        let linked = plain.clone().with_dependencies([4]);
        assert_eq!(dependency_score(&plain), 0.3);
        assert_eq!(dependency_score(&linked), 0.8);
    }

    #[test]
    fn test_smart_balance_worked_example() {
        let task = task_due_in(2, 4.0, 9);
        let scored = score(&task, today(), &StrategyWeights::smart_balance());

        assert_eq!(scored.component_scores.urgency, 0.6);
        assert_eq!(scored.component_scores.importance, 0.9);
        assert_eq!(scored.component_scores.effort, 0.7);
        assert_eq!(scored.component_scores.dependency, 0.3);
        assert_eq!(scored.priority_score, 0.68);
        assert_eq!(scored.explanation, "This task has high importance");
    }

    #[test]
    fn test_overdue_dominates_deadline_driven() {
        let task = task_due_in(-1, 20.0, 1).with_dependencies([2]);
        let scored = score(&task, today(), &StrategyWeights::deadline_driven());

        assert_eq!(scored.component_scores.urgency, 1.0);
        assert!(scored.priority_score >= 0.7);
        assert_eq!(scored.priority_level(), PriorityLevel::High);
    }

    #[test]
    fn test_explanation_lists_dominant_components_in_order() {
        let task = task_due_in(0, 0.5, 8).with_dependencies([1]);
        let scored = score(&task, today(), &StrategyWeights::smart_balance());
        assert_eq!(
            scored.explanation,
            "This task has high urgency, high importance, quick win, blocks other tasks"
        );
    }

    #[test]
    fn test_explanation_threshold_is_strict() {
        // importance 7 -> 0.7 and 4h -> 0.7 sit exactly on the threshold
        let task = task_due_in(10, 4.0, 7);
        let scored = score(&task, today(), &StrategyWeights::smart_balance());
        assert_eq!(scored.explanation, FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_priority_is_clamped() {
        let heavy = StrategyWeights {
            urgency: 2.0,
            importance: 2.0,
            effort: 2.0,
            dependencies: 2.0,
        };
        let scored = score(&task_due_in(0, 1.0, 10), today(), &heavy);
        assert_eq!(scored.priority_score, 1.0);

        let zero = StrategyWeights {
            urgency: 0.0,
            importance: 0.0,
            effort: 0.0,
            dependencies: 0.0,
        };
        assert_eq!(score(&task_due_in(0, 1.0, 10), today(), &zero).priority_score, 0.0);
    }

    #[test]
    fn test_different_strategies_differ() {
        let task = task_due_in(0, 2.0, 8);
        let smart = score(&task, today(), &StrategyWeights::smart_balance());
        let fast = score(&task, today(), &StrategyWeights::fastest_wins());
        assert_ne!(smart.priority_score, fast.priority_score);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let task = task_due_in(5, 6.5, 6).with_dependencies([1, 2]);
        let weights = StrategyWeights::high_impact();
        let a = score(&task, today(), &weights);
        let b = score(&task, today(), &weights);
        assert_eq!(a, b);
        assert_eq!(a.priority_score.to_bits(), b.priority_score.to_bits());
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(PriorityLevel::from_score(0.7), PriorityLevel::High);
        assert_eq!(PriorityLevel::from_score(0.69), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::from_score(0.4), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::from_score(0.39), PriorityLevel::Low);
    }

    #[test]
    fn test_scored_task_serializes_flat() {
        let scored = score(&task_due_in(2, 4.0, 9), today(), &StrategyWeights::default());
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["title"], "Test Task");
        assert_eq!(json["due_date"], "2025-03-12");
        assert_eq!(json["priority_score"], 0.68);
        assert_eq!(json["component_scores"]["urgency"], 0.6);
        assert!(json["explanation"].is_string());
    }
}
