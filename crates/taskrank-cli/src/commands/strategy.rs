use clap::Subcommand;
use taskrank_core::{Config, Strategy};

use super::{load_session, CmdResult};

#[derive(Subcommand)]
pub enum StrategyAction {
    /// List the built-in strategies and their weights
    List,
    /// Show the strategy the next analysis will use
    Show,
    /// Choose the strategy for this session
    Set {
        /// Strategy name, e.g. deadline_driven
        name: String,
    },
}

pub fn run(action: StrategyAction) -> CmdResult {
    let config = Config::load_or_default();
    let mut session = load_session(&config)?;

    match action {
        StrategyAction::List => {
            println!(
                "  {:<16} {:>8} {:>11} {:>7} {:>13}",
                "name", "urgency", "importance", "effort", "dependencies"
            );
            for strategy in Strategy::ALL {
                let w = strategy.weights();
                let marker = if strategy == session.strategy { "*" } else { " " };
                println!(
                    "{marker} {:<16} {:>8.1} {:>11.1} {:>7.1} {:>13.1}  {}",
                    strategy.name(),
                    w.urgency,
                    w.importance,
                    w.effort,
                    w.dependencies,
                    strategy.description()
                );
            }
        }
        StrategyAction::Show => {
            let s = session.strategy;
            println!("{} ({})", s.display_name(), s.name());
        }
        StrategyAction::Set { name } => {
            let strategy = Strategy::lookup(&name).ok_or_else(|| {
                let known: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
                format!("unknown strategy '{name}' (expected one of: {})", known.join(", "))
            })?;
            session.set_strategy(strategy);
            session.save()?;
            println!("Strategy set to {}", strategy.display_name());
        }
    }
    Ok(())
}
