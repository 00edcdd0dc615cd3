//! Restaurant order session entry point.

use app::{Config, ReportFormat};
use ledger::Ledger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    app::telemetry::init_tracing(&config);

    // 2. Install Prometheus metrics recorder
    let metrics_handle = app::telemetry::init_metrics()?;

    // 3. Run the session against a fresh ledger
    let payment = config.payment_strategy()?;
    let mut ledger = Ledger::new();
    let report = app::run_session(&mut ledger, payment.as_ref())?;

    // 4. Print the report
    match config.report_format {
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => println!("{}", report.to_json_pretty()?),
    }

    if config.print_metrics {
        println!("{}", metrics_handle.render());
    }

    tracing::info!(orders = ledger.total_orders(), "session finished");
    Ok(())
}
