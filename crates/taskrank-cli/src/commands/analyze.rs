//! `analyze` and `suggest` commands.

use clap::Args;
use serde::Serialize;
use taskrank_core::{ensure_acyclic, suggestions, Analysis, Analyzer, Config, Strategy, Suggestion};

use super::{load_session, reference_date, CmdResult};
use crate::render;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Strategy name (unknown names fall back to smart_balance)
    #[arg(long, short)]
    strategy: Option<String>,
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    date: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Strategy name (unknown names fall back to smart_balance)
    #[arg(long, short)]
    strategy: Option<String>,
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    date: Option<String>,
    /// Number of suggestions (default from config)
    #[arg(short = 'n', long)]
    count: Option<usize>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    suggested_tasks: &'a [Suggestion],
}

pub fn run_analyze(args: AnalyzeArgs) -> CmdResult {
    let config = Config::load_or_default();
    let mut session = load_session(&config)?;
    render::configure(&config.display);
    ensure_acyclic(&session.tasks)?;

    let strategy = args
        .strategy
        .as_deref()
        .map(Strategy::resolve)
        .unwrap_or(session.strategy);
    let analyzer = Analyzer::new(strategy, reference_date(args.date.as_deref())?);

    let analysis = analyzer.analyze(&session.tasks);
    let picks = suggestions(&analysis.tasks, config.analysis.suggestion_count);

    if args.json {
        let output = AnalyzeOutput {
            analysis: &analysis,
            suggested_tasks: &picks,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render::analysis(&analysis, &config.display);
        println!();
        render::suggestions(&picks);
    }

    session.record_analysis(analysis);
    session.save()?;
    Ok(())
}

pub fn run_suggest(args: SuggestArgs) -> CmdResult {
    let config = Config::load_or_default();
    let session = load_session(&config)?;
    render::configure(&config.display);
    ensure_acyclic(&session.tasks)?;

    let strategy = args
        .strategy
        .as_deref()
        .map(Strategy::resolve)
        .unwrap_or(session.strategy);
    let analyzer = Analyzer::new(strategy, reference_date(args.date.as_deref())?);
    let count = args.count.unwrap_or(config.analysis.suggestion_count);

    let report = analyzer.suggest(&session.tasks, count);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.explanation);
        println!();
        render::suggestions(&report.suggested_tasks);
    }
    Ok(())
}
