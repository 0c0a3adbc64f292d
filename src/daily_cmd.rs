//! Daily command: sample a day-activity curve and print it.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use navchain_daily::DailyCurve;

use crate::cli::DailyArgs;
use crate::convert;
use crate::report::DailyReport;

/// Run the `daily` subcommand.
pub fn run(args: DailyArgs) -> Result<()> {
    let _cmd = info_span!("daily").entered();

    let (preset, profile, curve_cfg) = convert::build_curve_inputs(&args)?;
    let curve = DailyCurve::generate(&profile, &curve_cfg)
        .with_context(|| format!("failed to generate {preset} day curve"))?;
    info!(%preset, peak_hour = ?curve.peak_hour(), "curve generated");

    let report = DailyReport::new(preset.to_string(), curve_cfg.time_shifts().to_vec(), &curve);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.hourly_table());
    }
    Ok(())
}
