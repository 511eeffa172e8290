//! Session-local task list.
//!
//! Holds the user's tasks in entry order, the chosen strategy, and the most
//! recent analysis. Stored as pretty JSON at `session.json` inside
//! [`data_dir`](super::data_dir). Analysis never reorders `tasks`, so the
//! positional ids used by dependencies stay valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::analysis::Analysis;
use crate::error::Result;
use crate::strategy::{self, Strategy};
use crate::task::{ImportedTasks, Task};

const FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, deserialize_with = "strategy::deserialize_lenient")]
    pub strategy: Strategy,
    /// Result of the last `analyze`, cleared whenever `tasks` changes.
    #[serde(default)]
    pub last_analysis: Option<Analysis>,
}

impl Session {
    /// `<data_dir>/session.json`
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join(FILE_NAME))
    }

    /// Load the session from the data directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path. A missing file is an empty session.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), tasks = self.tasks.len(), "session saved");
        Ok(())
    }

    /// Append a task. Returns its 1-based id.
    pub fn add_task(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.last_analysis = None;
        self.tasks.len()
    }

    /// Replace the task list with an import, adopting its strategy if it named one.
    pub fn replace_tasks(&mut self, imported: ImportedTasks) {
        self.tasks = imported.tasks;
        if let Some(name) = imported.strategy {
            self.strategy = Strategy::resolve(&name);
        }
        self.last_analysis = None;
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
        self.last_analysis = None;
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        if self.strategy != strategy {
            self.strategy = strategy;
            self.last_analysis = None;
        }
    }

    pub fn record_analysis(&mut self, analysis: Analysis) {
        self.last_analysis = Some(analysis);
    }
}
