//! Claims Dashboard - command-line renderer
//!
//! Loads the session's claims, applies the configured query, and prints the
//! resulting claims table.
//!
//! # Usage
//!
//! ```bash
//! # Mock session, all claims
//! cargo run --bin claims-dashboard
//!
//! # High-priority claims from a JSON file, as JSON
//! DASHBOARD_CLAIMS_PATH=claims.json DASHBOARD_PRIORITY_FILTER=high DASHBOARD_OUTPUT=json \
//!     cargo run --bin claims-dashboard
//! ```
//!
//! # Environment Variables
//!
//! * `DASHBOARD_CLAIMS_PATH` - JSON array of claim records (default: built-in mock claims)
//! * `DASHBOARD_PRIORITY_FILTER` - all, low, medium, high (default: all)
//! * `DASHBOARD_SEARCH_TERM` - patient, claim id, or provider search (default: empty)
//! * `DASHBOARD_OUTPUT` - table or json (default: table)
//! * `DASHBOARD_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use anyhow::Context;
use interface_dashboard::{config::DashboardConfig, load_store, DashboardSession};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = DashboardConfig::from_env().context("loading dashboard configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        priority = %config.priority_filter,
        search = %config.search_term,
        "Starting claims dashboard"
    );

    let store = load_store(&config).context("loading claims")?;
    let session = DashboardSession::from_config(store, &config);
    let view = session.view();

    tracing::info!(shown = view.rows.len(), total = session.store().len(), "Claims filtered");

    print!("{}", view.render(config.output).context("rendering claims")?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so that table or JSON output on stdout stays clean.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
