//! Fetch one query view from the API and print it.

use crate::report::{OutputFormat, Report};
use anyhow::Context;
use log::info;
use std::cell::RefCell;
use std::io::{self, Write};
use std::time::Duration;
use transit_core::api::ApiClient;
use transit_core::params::{Endpoint, QueryParams};
use transit_views::hourly_frequency::HourlyFrequencyView;
use transit_views::stops::{BusiestStopsView, TransferPointsView};
use transit_views::trip_speed::TripSpeedView;
use transit_views::{load, QueryView};

/// Run `view` once with `params` against `api_url` and write the report to stdout.
pub async fn run_query(
    view: Endpoint,
    params: QueryParams,
    api_url: &str,
    timeout: Duration,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url, timeout)
        .with_context(|| format!("Failed to build HTTP client for {}", api_url))?;

    info!(
        "Querying {} from {} (service_id={}, limit={})",
        view.title(),
        client.base_url(),
        params.service,
        params.limit
    );

    match view {
        Endpoint::BusiestStops => emit(&fetch::<BusiestStopsView>(&client, params).await?, format),
        Endpoint::TripSpeed => emit(&fetch::<TripSpeedView>(&client, params).await?, format),
        Endpoint::TransferPoints => {
            emit(&fetch::<TransferPointsView>(&client, params).await?, format)
        }
        Endpoint::HourlyFrequency => {
            emit(&fetch::<HourlyFrequencyView>(&client, params).await?, format)
        }
    }
}

async fn fetch<V>(client: &ApiClient, params: QueryParams) -> anyhow::Result<V::Output>
where
    V: QueryView + Default,
{
    let view = RefCell::new(V::default());
    let output = load(&view, params, |endpoint, params| {
        client.fetch_text(endpoint, params)
    })
    .await
    .with_context(|| format!("{} query failed", V::ENDPOINT.path()))?;
    Ok(output)
}

fn emit<R: Report>(report: &R, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_report(&mut out, format)?;
    out.flush()?;
    Ok(())
}
