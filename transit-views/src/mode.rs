use transit_core::params::QueryParams;

/// How a view lays out one result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Service 4: list only, grouped by day type.
    WholeWeek,
    /// `limit = all`: list only, no charts.
    Unbounded,
    /// One service and a bounded limit: charts and table.
    Charts,
}

impl RenderMode {
    pub fn select(params: &QueryParams) -> Self {
        if params.service.is_whole_week() {
            RenderMode::WholeWeek
        } else if params.limit.is_unbounded() {
            RenderMode::Unbounded
        } else {
            RenderMode::Charts
        }
    }

    pub fn draws_charts(&self) -> bool {
        matches!(self, RenderMode::Charts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_core::params::{Limit, ServiceId};

    fn params(service: &str, limit: &str) -> QueryParams {
        QueryParams::new(service.parse().unwrap(), limit.parse().unwrap())
    }

    #[test]
    fn whole_week_wins_over_limit() {
        assert_eq!(RenderMode::select(&params("4", "all")), RenderMode::WholeWeek);
        assert_eq!(RenderMode::select(&params("4", "10")), RenderMode::WholeWeek);
    }

    #[test]
    fn unbounded_single_service_lists_only() {
        let mode = RenderMode::select(&params("2", "all"));
        assert_eq!(mode, RenderMode::Unbounded);
        assert!(!mode.draws_charts());
    }

    #[test]
    fn bounded_single_service_draws_charts() {
        let mode = RenderMode::select(&QueryParams::new(ServiceId::Sunday, Limit::default()));
        assert_eq!(mode, RenderMode::Charts);
        assert!(mode.draws_charts());
    }
}
