use crate::error::TransitError;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Day-type partition of transit service, as encoded by the `service_id`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceId {
    #[default]
    Weekday,
    Saturday,
    Sunday,
    /// Aggregate over every day type.
    WholeWeek,
}

impl ServiceId {
    pub const ALL: [ServiceId; 4] = [
        ServiceId::Weekday,
        ServiceId::Saturday,
        ServiceId::Sunday,
        ServiceId::WholeWeek,
    ];

    /// Wire value of the selector ("1".."4").
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::Weekday => "1",
            ServiceId::Saturday => "2",
            ServiceId::Sunday => "3",
            ServiceId::WholeWeek => "4",
        }
    }

    /// Human readable name used in the selector dropdown.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceId::Weekday => "Weekday",
            ServiceId::Saturday => "Saturday",
            ServiceId::Sunday => "Sunday",
            ServiceId::WholeWeek => "Whole week",
        }
    }

    pub fn is_whole_week(&self) -> bool {
        matches!(self, ServiceId::WholeWeek)
    }
}

impl FromStr for ServiceId {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ServiceId::Weekday),
            "2" => Ok(ServiceId::Saturday),
            "3" => Ok(ServiceId::Sunday),
            "4" => Ok(ServiceId::WholeWeek),
            other => Err(TransitError::InvalidService(other.to_string())),
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const DEFAULT_TOP: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => panic!("default limit must be non-zero"),
};

/// Bound on the number of entities a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    Top(NonZeroU32),
    /// The `all` sentinel: no bound.
    All,
}

impl Limit {
    /// Values offered by the limit dropdown.
    pub const CHOICES: [&'static str; 4] = ["10", "20", "50", "all"];

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Limit::All)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit::Top(DEFAULT_TOP)
    }
}

impl FromStr for Limit {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Limit::All);
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .map(Limit::Top)
            .ok_or_else(|| TransitError::InvalidLimit(trimmed.to_string()))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Top(n) => write!(f, "{}", n),
            Limit::All => f.write_str("all"),
        }
    }
}

/// The two form parameters every query view sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
    pub service: ServiceId,
    pub limit: Limit,
}

impl QueryParams {
    pub fn new(service: ServiceId, limit: Limit) -> Self {
        Self { service, limit }
    }

    /// `(name, value)` pairs in the order the API expects them.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("service_id", self.service.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Query string without the leading `?`. Both values are URL-safe.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// One of the four analytical query endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    BusiestStops,
    TripSpeed,
    TransferPoints,
    HourlyFrequency,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::BusiestStops,
        Endpoint::TripSpeed,
        Endpoint::TransferPoints,
        Endpoint::HourlyFrequency,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::BusiestStops => "/api/q1",
            Endpoint::TripSpeed => "/api/q2",
            Endpoint::TransferPoints => "/api/q3",
            Endpoint::HourlyFrequency => "/api/q4",
        }
    }

    /// Short key used for DOM ids and CLI arguments.
    pub fn key(&self) -> &'static str {
        match self {
            Endpoint::BusiestStops => "q1",
            Endpoint::TripSpeed => "q2",
            Endpoint::TransferPoints => "q3",
            Endpoint::HourlyFrequency => "q4",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Endpoint::BusiestStops => "Busiest Stops",
            Endpoint::TripSpeed => "Trip Duration & Speed",
            Endpoint::TransferPoints => "Transfer Points",
            Endpoint::HourlyFrequency => "Hourly Frequency",
        }
    }

    /// Full request URL for `base` (scheme + host, with or without a trailing slash).
    pub fn url(&self, base: &str, params: &QueryParams) -> String {
        format!(
            "{}{}?{}",
            base.trim_end_matches('/'),
            self.path(),
            params.query_string()
        )
    }
}

impl FromStr for Endpoint {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q1" | "busiest-stops" => Ok(Endpoint::BusiestStops),
            "q2" | "trip-speed" => Ok(Endpoint::TripSpeed),
            "q3" | "transfer-points" => Ok(Endpoint::TransferPoints),
            "q4" | "hourly-frequency" => Ok(Endpoint::HourlyFrequency),
            other => Err(TransitError::UnknownView(other.to_string())),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
