//! Command implementations for the transit CLI.
//!
//! Runs the dashboard's four analytical queries against the API from the
//! terminal, rendering the same view models as text or CSV.

use clap::Subcommand;
use std::time::Duration;
use transit_core::api::DEFAULT_API_URL;
use transit_core::params::{Endpoint, Limit, QueryParams, ServiceId};

pub mod query;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Run one query view and print its table, banner and chart series
    Query {
        /// View to run: q1|busiest-stops, q2|trip-speed, q3|transfer-points, q4|hourly-frequency
        view: Endpoint,

        /// Day type: 1 weekday, 2 Saturday, 3 Sunday, 4 whole week
        #[arg(short = 's', long, default_value = "1")]
        service_id: ServiceId,

        /// Number of results, or `all`
        #[arg(short = 'l', long, default_value = "20")]
        limit: Limit,

        /// Base URL of the query API
        #[arg(long, env = "TRANSIT_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,

        /// Print the table as CSV instead of aligned text
        #[arg(long)]
        csv: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            view,
            service_id,
            limit,
            api_url,
            timeout_secs,
            csv,
        } => {
            let format = if csv {
                report::OutputFormat::Csv
            } else {
                report::OutputFormat::Text
            };
            query::run_query(
                view,
                QueryParams::new(service_id, limit),
                &api_url,
                Duration::from_secs(timeout_secs),
                format,
            )
            .await
        }
    }
}
