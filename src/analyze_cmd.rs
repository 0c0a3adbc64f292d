//! Analyze command: propagate a navigation model and print the results.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::AnalyzeArgs;
use crate::config;
use crate::convert;
use crate::report::AnalysisReport;

/// Run the `analyze` subcommand.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Load model TOML
    let model = config::load_model(&args.config)?;
    let iterations = args.iterations.unwrap_or(model.iterations);

    // 2. Build engine
    let mut engine = convert::build_engine(&model)
        .with_context(|| format!("invalid model: {}", args.config.display()))?;
    info!(
        n_states = engine.states().len(),
        n_transitions = model.transitions.len(),
        initial = engine.initial_state(),
        iterations,
        "model loaded"
    );

    // 3. Propagate
    engine
        .run(iterations)
        .with_context(|| format!("propagation failed for {}", args.config.display()))?;

    // 4. Print
    let report = AnalysisReport::from_engine(&engine);
    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }
    if args.show_matrix {
        println!("{}", report.matrix_table());
    }
    println!("{}", report.scores_table());
    if args.show_history {
        println!("{}", report.history_table());
    }
    Ok(())
}
