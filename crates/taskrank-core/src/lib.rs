//! # taskrank Core Library
//!
//! Ranks a list of tasks by a computed priority so a user can decide what to
//! work on next. All operations are available through the `taskrank` CLI,
//! which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Scoring**: pure function from (task, reference date, strategy weights)
//!   to four component scores, a clamped priority score and an explanation
//! - **Ranking**: stable descending sort plus a top-N suggestion list
//! - **Strategies**: fixed table of named weight vectors
//! - **Input**: validation and JSON import guarding the scorer
//! - **Storage**: JSON session file and TOML configuration
//!
//! ## Key Components
//!
//! - [`score`]: Score one task
//! - [`rank`] / [`suggest`]: Order scored tasks and pick the next few
//! - [`Analyzer`]: Score, rank and suggest in one call
//! - [`Session`]: Persisted task list and chosen strategy
//! - [`Config`]: Application configuration management

pub mod analysis;
pub mod dependencies;
pub mod error;
pub mod ranking;
pub mod samples;
pub mod scoring;
pub mod storage;
pub mod strategy;
pub mod task;

pub use analysis::{Analysis, Analyzer, SuggestionReport};
pub use dependencies::{ensure_acyclic, find_dependency_cycles};
pub use error::{ConfigError, CoreError, ValidationError};
pub use ranking::{rank, suggest, suggestions, Suggestion, DEFAULT_SUGGESTION_COUNT};
pub use samples::sample_tasks;
pub use scoring::{score, Component, ComponentScores, PriorityLevel, ScoredTask};
pub use storage::{Config, Session};
pub use strategy::{Strategy, StrategyWeights};
pub use task::{parse_tasks_json, ImportedTasks, Task, TaskInput};
