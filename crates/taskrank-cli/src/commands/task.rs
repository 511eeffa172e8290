//! Task list commands for CLI.

use std::io::Read;

use clap::Subcommand;
use taskrank_core::{parse_tasks_json, sample_tasks, Config, TaskInput};

use super::{load_session, reference_date, CmdResult};
use crate::render;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Estimated hours
        #[arg(long)]
        hours: f64,
        /// Importance from 1 (low) to 10 (high)
        #[arg(long, allow_negative_numbers = true)]
        importance: i64,
        /// Comma-separated ids of tasks this one depends on (e.g. "1,3")
        #[arg(long)]
        deps: Option<String>,
    },
    /// List tasks in entry order
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replace the task list with a JSON array (or {"tasks": [...], "strategy": ...})
    Import {
        /// File to read, or "-" for stdin
        path: String,
    },
    /// Replace the task list with the built-in samples
    Sample {
        /// Date the sample deadlines are relative to (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove every task
    Clear,
}

pub fn run(action: TaskAction) -> CmdResult {
    let config = Config::load_or_default();
    let mut session = load_session(&config)?;
    render::configure(&config.display);

    match action {
        TaskAction::Add {
            title,
            due,
            hours,
            importance,
            deps,
        } => {
            let input = TaskInput {
                title: Some(title),
                due_date: Some(due),
                estimated_hours: Some(hours),
                importance: Some(importance),
                dependencies: deps.as_deref().map(parse_deps).transpose()?,
            };
            let task = input.validate(session.tasks.len() + 1)?;
            let id = session.add_task(task);
            session.save()?;
            println!("Task added: #{id}");
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.tasks)?);
            } else {
                render::task_list(&session.tasks);
            }
        }
        TaskAction::Import { path } => {
            let text = if path == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&path)?
            };
            if text.trim().is_empty() {
                return Err("no JSON data provided".into());
            }
            let imported = parse_tasks_json(&text)?;
            let count = imported.tasks.len();
            session.replace_tasks(imported);
            session.save()?;
            println!("Loaded {count} tasks from JSON");
        }
        TaskAction::Sample { date } => {
            let today = reference_date(date.as_deref())?;
            session.replace_tasks(taskrank_core::ImportedTasks {
                tasks: sample_tasks(today),
                strategy: None,
            });
            session.save()?;
            println!("Sample tasks loaded ({})", session.tasks.len());
        }
        TaskAction::Clear => {
            session.clear();
            session.save()?;
            println!("All tasks removed");
        }
    }
    Ok(())
}

/// Blank entries are skipped, anything else must be a positive integer.
fn parse_deps(raw: &str) -> Result<Vec<u32>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<u32>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(format!("invalid dependency id '{s}' (ids start at 1)")),
        })
        .collect()
}
