//! Typed responses of the four query endpoints.
//!
//! Responses are validated here, at the API boundary. Fields the backend is
//! loose about are normalized while decoding:
//! - coordinates that are missing, `null`, strings or non-finite become `None`
//!   so the item can still be listed even though it cannot be mapped
//! - identifiers that may arrive as numbers (`stop_code`, `route_short_name`,
//!   `service_id`) become strings
//! - `null` stop and route names become empty strings
//! - missing lists decode as empty

use crate::geo::LatLng;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).filter(|v| v.is_finite()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// `/api/q1` and `/api/q3` wrap their items in an object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A stop ranked by trip events (`/api/q1`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusiestStop {
    #[serde(default, deserialize_with = "lenient_string")]
    pub stop_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stop_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub stop_name: String,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub stop_lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub stop_lon: Option<f64>,
    pub total_trip_events: u64,
    pub num_unique_routes: u64,
}

impl BusiestStop {
    pub fn position(&self) -> Option<LatLng> {
        LatLng::checked(self.stop_lat, self.stop_lon)
    }
}

/// A stop served by at least two distinct routes (`/api/q3`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransferPoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub stop_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stop_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub stop_name: String,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub stop_lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub stop_lon: Option<f64>,
    pub num_unique_routes: u64,
}

impl TransferPoint {
    pub fn position(&self) -> Option<LatLng> {
        LatLng::checked(self.stop_lat, self.stop_lon)
    }
}

/// Trip-weighted averages across every route in a `/api/q2` result.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct OverallAverages {
    #[serde(default)]
    pub avg_duration_min: Option<f64>,
    #[serde(default)]
    pub avg_speed_kmh: Option<f64>,
}

/// Route statistics across the whole week.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct RouteTotals {
    #[serde(default)]
    pub total_trips: Option<u64>,
    #[serde(default)]
    pub avg_trip_distance_km: Option<f64>,
    #[serde(default)]
    pub avg_duration_min: Option<f64>,
    #[serde(default)]
    pub avg_speed_kmh: Option<f64>,
}

/// Route statistics for one service day type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceRouteStats {
    #[serde(default, deserialize_with = "lenient_name")]
    pub route_long_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub route_short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service_id: Option<String>,
    #[serde(default)]
    pub total_trips: u64,
    #[serde(default)]
    pub avg_trip_distance_km: Option<f64>,
    #[serde(default)]
    pub avg_duration_min: Option<f64>,
    #[serde(default)]
    pub duration_stddev_min: Option<f64>,
    #[serde(default)]
    pub avg_speed_kmh: Option<f64>,
}

/// A route in a whole-week `/api/q2` result, with its per-service breakdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyRouteStats {
    #[serde(default, deserialize_with = "lenient_name")]
    pub route_long_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub route_short_name: Option<String>,
    #[serde(default)]
    pub global: RouteTotals,
    #[serde(default)]
    pub services: Vec<ServiceRouteStats>,
}

/// `/api/q2`: average trip duration and speed per route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TripSpeedResponse {
    WholeWeek {
        #[serde(default)]
        routes: Vec<WeeklyRouteStats>,
        #[serde(default)]
        overall: Option<OverallAverages>,
    },
    SingleService {
        #[serde(default)]
        routes: Vec<ServiceRouteStats>,
        #[serde(default)]
        overall: Option<OverallAverages>,
    },
}

impl TripSpeedResponse {
    pub fn overall(&self) -> Option<&OverallAverages> {
        match self {
            TripSpeedResponse::WholeWeek { overall, .. }
            | TripSpeedResponse::SingleService { overall, .. } => overall.as_ref(),
        }
    }

    pub fn is_whole_week(&self) -> bool {
        matches!(self, TripSpeedResponse::WholeWeek { .. })
    }

    pub fn route_count(&self) -> usize {
        match self {
            TripSpeedResponse::WholeWeek { routes, .. } => routes.len(),
            TripSpeedResponse::SingleService { routes, .. } => routes.len(),
        }
    }
}

/// Trips departing within one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub trips: u64,
}

/// Daily trip totals per day type, keyed `"1"`..`"3"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ServiceTotals {
    #[serde(rename = "1", default)]
    pub weekday: u64,
    #[serde(rename = "2", default)]
    pub saturday: u64,
    #[serde(rename = "3", default)]
    pub sunday: u64,
}

/// A route's hourly departure profile (`/api/q4`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyRoute {
    #[serde(default, deserialize_with = "lenient_name")]
    pub route_long_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub route_short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service_id: Option<String>,
    #[serde(default)]
    pub hourly: Vec<HourCount>,
    #[serde(default)]
    pub total_daily_trips: Option<u64>,
    /// Only present for whole-week queries.
    #[serde(default)]
    pub totals_by_service: Option<ServiceTotals>,
    /// Only present for whole-week queries.
    #[serde(default)]
    pub average_daily_trips: Option<f64>,
}

/// `/api/q4`: trips per hour for each route.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HourlyFrequencyResponse {
    #[serde(default)]
    pub max_hour: u32,
    #[serde(default)]
    pub routes: Vec<HourlyRoute>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn busiest_stops_decode_with_bad_coordinates_kept() {
        let body = json!({
            "items": [
                {"stop_id": 14238, "stop_code": 4521, "stop_name": "Finch Station",
                 "stop_lat": 43.7806, "stop_lon": -79.4153,
                 "total_trip_events": 5210, "num_unique_routes": 9},
                {"stop_id": "x1", "stop_code": null, "stop_name": "Unknown",
                 "stop_lat": "n/a", "stop_lon": null,
                 "total_trip_events": 12, "num_unique_routes": 1}
            ]
        });
        let response: StopsResponse<BusiestStop> = serde_json::from_value(body).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].stop_id.as_deref(), Some("14238"));
        assert_eq!(response.items[0].stop_code.as_deref(), Some("4521"));
        assert!(response.items[0].position().is_some());
        assert_eq!(response.items[1].stop_code, None);
        assert!(response.items[1].position().is_none());
    }

    #[test]
    fn stops_response_without_items_is_empty() {
        let response: StopsResponse<TransferPoint> = serde_json::from_value(json!({})).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn stop_missing_metric_is_rejected() {
        let body = json!({"items": [{"stop_name": "Kipling", "stop_lat": 43.6, "stop_lon": -79.5}]});
        assert!(serde_json::from_value::<StopsResponse<TransferPoint>>(body).is_err());
    }

    #[test]
    fn trip_speed_whole_week_decodes() {
        let body = json!({
            "mode": "whole_week",
            "routes": [{
                "route_short_name": "52", "route_long_name": "Lawrence West",
                "global": {"total_trips": 140, "avg_duration_min": 35.2, "avg_speed_kmh": 22.1},
                "services": [{"service_id": "1", "total_trips": 100, "avg_duration_min": 36.0}]
            }],
            "overall": {"avg_duration_min": 35.2, "avg_speed_kmh": 22.1}
        });
        let response: TripSpeedResponse = serde_json::from_value(body).unwrap();
        assert!(response.is_whole_week());
        assert_eq!(response.route_count(), 1);
        match response {
            TripSpeedResponse::WholeWeek { routes, .. } => {
                assert_eq!(routes[0].global.total_trips, Some(140));
                assert_eq!(routes[0].services[0].service_id.as_deref(), Some("1"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn trip_speed_single_service_accepts_null_averages() {
        let body = json!({
            "mode": "single_service",
            "routes": [{"route_short_name": 7, "route_long_name": "Bathurst", "service_id": 2,
                        "total_trips": 88, "avg_duration_min": null, "avg_speed_kmh": 18.4}],
            "overall": null
        });
        let response: TripSpeedResponse = serde_json::from_value(body).unwrap();
        assert!(response.overall().is_none());
        match response {
            TripSpeedResponse::SingleService { routes, .. } => {
                assert_eq!(routes[0].route_short_name.as_deref(), Some("7"));
                assert_eq!(routes[0].service_id.as_deref(), Some("2"));
                assert_eq!(routes[0].avg_duration_min, None);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn null_stop_name_decodes_as_empty() {
        let body = json!({
            "items": [
                {"stop_name": null, "stop_lat": 43.7, "stop_lon": -79.4,
                 "total_trip_events": 40, "num_unique_routes": 3},
                {"stop_name": "Kipling Station", "stop_lat": 43.64, "stop_lon": -79.53,
                 "total_trip_events": 30, "num_unique_routes": 5}
            ]
        });
        let response: StopsResponse<BusiestStop> = serde_json::from_value(body).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].stop_name, "");
        assert_eq!(response.items[1].stop_name, "Kipling Station");
    }

    #[test]
    fn null_route_long_name_decodes_as_empty() {
        let body = json!({
            "mode": "single_service",
            "routes": [
                {"route_short_name": "501", "route_long_name": null, "service_id": "1",
                 "total_trips": 60, "avg_duration_min": 48.0, "avg_speed_kmh": 12.5},
                {"route_short_name": "7", "route_long_name": "Bathurst", "service_id": "1",
                 "total_trips": 88, "avg_duration_min": 21.5, "avg_speed_kmh": 18.4}
            ]
        });
        let response: TripSpeedResponse = serde_json::from_value(body).unwrap();
        match response {
            TripSpeedResponse::SingleService { routes, .. } => {
                assert_eq!(routes.len(), 2);
                assert_eq!(routes[0].route_long_name, "");
                assert_eq!(routes[1].route_long_name, "Bathurst");
            }
            other => panic!("unexpected variant: {:?}", other),
        }

        let hourly: HourlyFrequencyResponse = serde_json::from_value(json!({
            "routes": [{"route_short_name": "29", "route_long_name": null, "hourly": []}]
        }))
        .unwrap();
        assert_eq!(hourly.routes[0].route_long_name, "");
    }

    #[test]
    fn trip_speed_unknown_mode_is_rejected() {
        let body = json!({"mode": "weekend", "routes": []});
        assert!(serde_json::from_value::<TripSpeedResponse>(body).is_err());
    }

    #[test]
    fn hourly_frequency_decodes_weekly_totals() {
        let body = json!({
            "max_hour": 25,
            "routes": [{
                "route_short_name": "29", "route_long_name": "Dufferin", "service_id": "all",
                "hourly": [{"hour": 5, "trips": 4}, {"hour": 6, "trips": 11}],
                "total_daily_trips": 15,
                "totals_by_service": {"1": 9, "2": 4},
                "average_daily_trips": 4.333
            }]
        });
        let response: HourlyFrequencyResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.max_hour, 25);
        let totals = response.routes[0].totals_by_service.unwrap();
        assert_eq!(totals, ServiceTotals { weekday: 9, saturday: 4, sunday: 0 });
        assert_eq!(response.routes[0].hourly[1], HourCount { hour: 6, trips: 11 });
    }
}
