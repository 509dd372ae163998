//! Plain-text and CSV rendering of view outputs.

use std::io::Write;
use transit_views::chart::{BarChartSpec, ValueLabels};
use transit_views::hourly_frequency::HourlyFrequencyOutput;
use transit_views::map::MapCommand;
use transit_views::stops::StopsOutput;
use transit_views::table::Table;
use transit_views::trip_speed::TripSpeedOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Banner, aligned table and chart series.
    Text,
    /// The table only, as CSV with a header row.
    Csv,
}

/// A view output that can be printed.
pub trait Report {
    fn write_report<W: Write>(&self, out: &mut W, format: OutputFormat) -> anyhow::Result<()>;
}

/// Write `table` with columns padded to their widest cell.
pub fn write_text_table<W: Write>(out: &mut W, table: &Table) -> anyhow::Result<()> {
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|c| c.label.chars().count())
        .collect();
    for row in &table.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.text.chars().count());
            }
        }
    }

    let line = |texts: Vec<&str>| {
        texts
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{:<width$}", text, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(table.columns.iter().map(|c| c.label.as_str()).collect()))?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", line(rule.iter().map(String::as_str).collect()))?;
    for row in &table.rows {
        writeln!(out, "{}", line(row.texts()))?;
    }
    Ok(())
}

pub fn write_csv_table<W: Write>(out: &mut W, table: &Table) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(table.columns.iter().map(|c| c.label.as_str()))?;
    for row in &table.rows {
        writer.write_record(row.texts())?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, table: &Table, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text_table(out, table),
        OutputFormat::Csv => write_csv_table(out, table),
    }
}

/// Each chart's title followed by its `label: value` series.
pub fn write_chart_series<W: Write>(out: &mut W, charts: &[BarChartSpec]) -> anyhow::Result<()> {
    for chart in charts {
        writeln!(out)?;
        writeln!(out, "{}", chart.title)?;
        for (label, value) in chart.labels.iter().zip(&chart.values) {
            match chart.value_labels {
                ValueLabels::Fixed2 => writeln!(out, "  {}: {:.2}", label, value)?,
                ValueLabels::Integer => writeln!(out, "  {}: {:.0}", label, value)?,
            }
        }
    }
    Ok(())
}

impl Report for StopsOutput {
    fn write_report<W: Write>(&self, out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
        if format == OutputFormat::Text {
            let mapped = self
                .map
                .iter()
                .filter(|c| matches!(c, MapCommand::AddMarker(_)))
                .count();
            writeln!(out, "Mapped {} of {} stops", mapped, self.table.len())?;
            writeln!(out)?;
        }
        write_table(out, &self.table, format)
    }
}

impl Report for TripSpeedOutput {
    fn write_report<W: Write>(&self, out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
        if format == OutputFormat::Csv {
            return write_csv_table(out, &self.table);
        }
        if let Some(overall) = &self.overall {
            writeln!(out, "{}", overall)?;
            writeln!(out)?;
        }
        write_text_table(out, &self.table)?;
        write_chart_series(out, &self.charts.create)
    }
}

impl Report for HourlyFrequencyOutput {
    fn write_report<W: Write>(&self, out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Csv => write_csv_table(out, &self.table),
            OutputFormat::Text => {
                if !self.table.is_empty() {
                    write_text_table(out, &self.table)?;
                }
                write_chart_series(out, &self.charts.create)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use transit_core::params::{Limit, QueryParams, ServiceId};
    use transit_views::hourly_frequency::HourlyFrequencyView;
    use transit_views::stops::TransferPointsView;
    use transit_views::table::{Cell, Column};
    use transit_views::trip_speed::TripSpeedView;
    use transit_views::QueryView;

    fn render<R: Report>(report: &R, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        report.write_report(&mut buf, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_table_pads_columns() {
        let mut table = Table::new(vec![
            Column::plain("Stop"),
            Column::plain("Code"),
            Column::plain("Unique routes"),
        ]);
        table.push_row(vec![Cell::text("Union"), Cell::text(""), Cell::numeric("8", 8.0)]);

        let mut buf = Vec::new();
        write_text_table(&mut buf, &table).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Stop   Code  Unique routes\n\
             -----  ----  -------------\n\
             Union        8\n"
        );
    }

    #[test]
    fn csv_table_quotes_fields() {
        let mut table = Table::new(vec![Column::plain("Route"), Column::plain("Trips")]);
        table.push_row(vec![Cell::text("Queen, East"), Cell::numeric("12", 12.0)]);

        let mut buf = Vec::new();
        write_csv_table(&mut buf, &table).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Route,Trips\n\"Queen, East\",12\n");
    }

    #[test]
    fn stops_report_summarizes_mapped_markers() {
        let response = serde_json::from_value(json!({"items": [
            {"stop_name": "Union", "stop_lat": 43.645, "stop_lon": -79.380, "num_unique_routes": 8},
            {"stop_name": "Nowhere", "stop_lat": null, "stop_lon": null, "num_unique_routes": 2}
        ]}))
        .unwrap();
        let output = TransferPointsView::new().render(&QueryParams::default(), response);

        let text = render(&output, OutputFormat::Text);
        assert!(text.starts_with("Mapped 1 of 2 stops\n\n"));
        assert!(text.contains("Nowhere"));

        let csv = render(&output, OutputFormat::Csv);
        assert_eq!(csv.lines().next(), Some("Stop,Code,Unique routes"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn trip_speed_report_prints_banner_table_and_series() {
        let response = serde_json::from_value(json!({
            "mode": "single_service",
            "routes": [{"route_short_name": "7", "route_long_name": "Bathurst", "service_id": "1",
                        "total_trips": 88, "avg_duration_min": 21.5, "avg_speed_kmh": 18.4}],
            "overall": {"avg_duration_min": 21.5, "avg_speed_kmh": 18.4}
        }))
        .unwrap();
        let output = TripSpeedView::new().render(&QueryParams::default(), response);

        let text = render(&output, OutputFormat::Text);
        assert!(text.starts_with("Overall averages — Duration: 21.50 min, Speed: 18.40 km/h\n"));
        assert!(text.contains("7 — Bathurst  Weekday  88"));
        assert!(text.contains("\nAverage Duration (min)\n  7 — Bathurst: 21.50\n"));
        assert!(text.contains("\nAverage Speed (km/h)\n  7 — Bathurst: 18.40\n"));

        let csv = render(&output, OutputFormat::Csv);
        assert!(!csv.contains("Overall"));
    }

    #[test]
    fn hourly_chart_mode_prints_integer_series_only() {
        let response = serde_json::from_value(json!({
            "max_hour": 23,
            "routes": [{"route_short_name": "29", "route_long_name": "Dufferin", "service_id": "1",
                        "hourly": [{"hour": 5, "trips": 4}, {"hour": 6, "trips": 11}],
                        "total_daily_trips": 15}]
        }))
        .unwrap();
        let params = QueryParams::new(ServiceId::Weekday, Limit::default());
        let output = HourlyFrequencyView::new().render(&params, response);

        let text = render(&output, OutputFormat::Text);
        assert_eq!(text, "\n29 — Dufferin — Total: 15\n  5: 4\n  6: 11\n");
    }
}
