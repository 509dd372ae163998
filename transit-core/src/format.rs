//! Label and number formatting shared by the dashboard and the CLI.

/// Format an optional average with two decimals; missing or NaN reads as `0.00`.
pub fn fmt2(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{:.2}", v),
        _ => "0.00".to_string(),
    }
}

/// `"<short> — <long>"` when the route has a short name, else the long name.
pub fn route_label(short_name: Option<&str>, long_name: &str) -> String {
    match short_name.map(str::trim) {
        Some(short) if !short.is_empty() => format!("{} — {}", short, long_name),
        _ => long_name.to_string(),
    }
}

/// Compact day-type label for a `service_id` echoed back by the API.
pub fn service_label(service_id: &str) -> &'static str {
    match service_id.trim() {
        "1" => "Weekday",
        "2" => "Sat",
        "3" => "Sun",
        _ => "Whole week",
    }
}

/// Escape text for interpolation into tooltip HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
