//! Built-in weighting strategies.
//!
//! A strategy only decides how the four component scores are combined. It is
//! always passed explicitly to the scorer, so switching strategies never
//! touches stored tasks.
//!
//! | strategy | urgency | importance | effort | dependencies |
//! |---|---|---|---|---|
//! | smart_balance (default) | 0.4 | 0.3 | 0.2 | 0.1 |
//! | fastest_wins | 0.2 | 0.2 | 0.5 | 0.1 |
//! | high_impact | 0.2 | 0.6 | 0.1 | 0.1 |
//! | deadline_driven | 0.7 | 0.1 | 0.1 | 0.1 |

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Weight for each component score. Weights are non-negative but need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

impl StrategyWeights {
    /// Default: deadlines first, then importance.
    pub fn smart_balance() -> Self {
        Self {
            urgency: 0.4,
            importance: 0.3,
            effort: 0.2,
            dependencies: 0.1,
        }
    }

    /// Favor short tasks.
    pub fn fastest_wins() -> Self {
        Self {
            urgency: 0.2,
            importance: 0.2,
            effort: 0.5,
            dependencies: 0.1,
        }
    }

    /// Favor stated importance.
    pub fn high_impact() -> Self {
        Self {
            urgency: 0.2,
            importance: 0.6,
            effort: 0.1,
            dependencies: 0.1,
        }
    }

    /// Favor approaching deadlines.
    pub fn deadline_driven() -> Self {
        Self {
            urgency: 0.7,
            importance: 0.1,
            effort: 0.1,
            dependencies: 0.1,
        }
    }
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self::smart_balance()
    }
}

/// Named strategy from the fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Machine name, e.g. `smart_balance`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    /// Human-facing name, e.g. `Smart Balance`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "Smart Balance",
            Strategy::FastestWins => "Fastest Wins",
            Strategy::HighImpact => "High Impact",
            Strategy::DeadlineDriven => "Deadline Driven",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "Balances urgency, importance, effort and dependencies",
            Strategy::FastestWins => "Prioritizes quick, low-effort tasks",
            Strategy::HighImpact => "Prioritizes the most important tasks",
            Strategy::DeadlineDriven => "Prioritizes tasks with the nearest deadlines",
        }
    }

    pub fn weights(&self) -> StrategyWeights {
        match self {
            Strategy::SmartBalance => StrategyWeights::smart_balance(),
            Strategy::FastestWins => StrategyWeights::fastest_wins(),
            Strategy::HighImpact => StrategyWeights::high_impact(),
            Strategy::DeadlineDriven => StrategyWeights::deadline_driven(),
        }
    }

    /// Exact lookup by machine name.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Lookup by machine name, falling back to [`Strategy::SmartBalance`].
    pub fn resolve(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::warn!(strategy = name, "unknown strategy, using smart_balance");
            Strategy::SmartBalance
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serde helper for stored strategy names: unknown names resolve to the default
/// instead of failing the whole file.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Strategy, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(Strategy::resolve(&name))
}
