//! Plain-text presentation of tasks, analyses and suggestions.

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};
use taskrank_core::scoring::days_until_due;
use taskrank_core::storage::DisplayConfig;
use taskrank_core::{Analysis, PriorityLevel, Suggestion, Task};

fn dependency_list(task: &Task) -> String {
    if task.dependencies.is_empty() {
        "none".to_string()
    } else {
        task.dependencies
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn due_label(task: &Task, today: chrono::NaiveDate) -> String {
    match days_until_due(task.due_date, today) {
        d if d < -1 => format!("{} (overdue by {} days)", task.due_date, -d),
        -1 => format!("{} (overdue by 1 day)", task.due_date),
        0 => format!("{} (today)", task.due_date),
        1 => format!("{} (tomorrow)", task.due_date),
        d => format!("{} (in {d} days)", task.due_date),
    }
}

fn level_badge(level: PriorityLevel) -> ColoredString {
    let text = format!("{} priority", level.label());
    match level {
        PriorityLevel::High => text.red().bold(),
        PriorityLevel::Medium => text.yellow(),
        PriorityLevel::Low => text.green(),
    }
}

/// Enable color only when configured and stdout is a terminal.
pub fn configure(display: &DisplayConfig) {
    colored::control::set_override(display.color && std::io::stdout().is_terminal());
}

pub fn task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks yet. Add one with `taskrank task add` or load `taskrank task sample`.");
        return;
    }
    for (i, task) in tasks.iter().enumerate() {
        println!(
            "#{:<3} {}  due {} · {}h · importance {}/10 · deps: {}",
            i + 1,
            task.title.bold(),
            task.due_date,
            task.estimated_hours,
            task.importance,
            dependency_list(task)
        );
    }
}

pub fn analysis(analysis: &Analysis, display: &DisplayConfig) {
    println!(
        "{} tasks analyzed ({}) as of {}",
        analysis.total_tasks,
        analysis.strategy_used.display_name(),
        analysis.reference_date
    );

    if analysis.tasks.is_empty() {
        println!();
        println!("No tasks analyzed yet");
        println!("Add tasks and run `taskrank analyze` to see priority scores");
        return;
    }

    for (i, scored) in analysis.tasks.iter().enumerate() {
        let task = &scored.task;
        println!();
        println!(
            "#{} {}  {:.3}  {}",
            i + 1,
            task.title.bold(),
            scored.priority_score,
            level_badge(scored.priority_level())
        );
        println!(
            "   due {} · {}h estimated · importance {}/10 · deps: {}",
            due_label(task, analysis.reference_date),
            task.estimated_hours,
            task.importance,
            dependency_list(task)
        );
        println!("   {}", scored.explanation.italic());
        if display.show_components {
            let c = &scored.component_scores;
            println!(
                "   {}",
                format!(
                    "components: urgency {:.2} · importance {:.2} · effort {:.2} · dependency {:.2}",
                    c.urgency, c.importance, c.effort, c.dependency
                )
                .dimmed()
            );
        }
    }
}

pub fn suggestions(picks: &[Suggestion]) {
    if picks.is_empty() {
        println!("No suggestions yet");
        println!("Add tasks and analyze them to get recommendations");
        return;
    }

    println!("{}", "Suggested next:".bold());
    for pick in picks {
        let task = &pick.task.task;
        println!(
            "{:>2}. {} (score {:.3}, due {}, {}h)",
            pick.rank, task.title, pick.task.priority_score, task.due_date, task.estimated_hours
        );
        println!("    Why start this: {}", pick.suggestion_reason);
    }
}
