//! Demo task list for trying the analyzer without typing anything in.

use chrono::{Duration, NaiveDate};

use crate::task::Task;

/// Five sample tasks with due dates relative to `reference_date`.
pub fn sample_tasks(reference_date: NaiveDate) -> Vec<Task> {
    let due = |days: i64| reference_date + Duration::days(days);
    vec![
        Task::new("Fix critical login bug", due(2), 4.0, 9),
        Task::new("Write project documentation", due(7), 6.0, 7).with_dependencies([1]),
        Task::new("Setup CI/CD pipeline", due(5), 8.0, 8),
        Task::new("Code review for feature X", due(1), 2.0, 6),
        Task::new("Team meeting preparation", due(0), 1.0, 5),
    ]
}
