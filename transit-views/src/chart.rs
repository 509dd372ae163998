//! Bar chart specs and the per-view registry of live chart instances.

use serde::Serialize;

/// Minimum canvas width of the fixed-size charts.
pub const MIN_CHART_WIDTH: u32 = 600;

/// Horizontal room reserved per x-axis label on fixed-size charts.
pub const WIDTH_PER_LABEL: u32 = 18;

/// How per-bar value labels are printed when the data-label plugin is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueLabels {
    Fixed2,
    Integer,
}

/// Canvas sizing. Fixed charts never resize with their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSize {
    Responsive,
    Fixed { min_width: u32, height: u32 },
}

impl ChartSize {
    /// Fixed height, width grown with the label count to avoid collisions.
    pub fn fixed_for_labels(label_count: usize, height: u32) -> Self {
        let per_labels = u32::try_from(label_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(WIDTH_PER_LABEL);
        ChartSize::Fixed {
            min_width: per_labels.max(MIN_CHART_WIDTH),
            height,
        }
    }
}

/// Everything the chart bridge needs to draw one bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    /// Assigned by [`ChartRegistry::replace`].
    pub id: String,
    pub title: String,
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub values: Vec<f64>,
    pub color: String,
    pub y_title: Option<String>,
    pub size: ChartSize,
    pub animation: bool,
    /// Show every x tick, rotated, in a small font.
    pub dense_ticks: bool,
    pub value_labels: ValueLabels,
}

impl BarChartSpec {
    pub fn new(title: impl Into<String>, dataset_label: impl Into<String>, color: &str) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            labels: Vec::new(),
            dataset_label: dataset_label.into(),
            values: Vec::new(),
            color: color.to_string(),
            y_title: None,
            size: ChartSize::Responsive,
            animation: true,
            dense_ticks: false,
            value_labels: ValueLabels::Integer,
        }
    }

    pub fn with_series(mut self, labels: Vec<String>, values: Vec<f64>) -> Self {
        self.labels = labels;
        self.values = values;
        self
    }

    pub fn with_y_title(mut self, title: &str) -> Self {
        self.y_title = Some(title.to_string());
        self
    }

    pub fn with_value_labels(mut self, labels: ValueLabels) -> Self {
        self.value_labels = labels;
        self
    }

    /// Fixed size, no animation, every label shown.
    pub fn static_layout(mut self, height: u32) -> Self {
        self.size = ChartSize::fixed_for_labels(self.labels.len(), height);
        self.animation = false;
        self.dense_ticks = true;
        self
    }
}

/// Chart instances to tear down and to create, in that order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartBatch {
    pub destroy: Vec<String>,
    pub create: Vec<BarChartSpec>,
}

/// Tracks the chart ids a view currently has on screen.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    prefix: String,
    generation: u64,
    live: Vec<String>,
}

impl ChartRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            generation: 0,
            live: Vec::new(),
        }
    }

    pub fn live(&self) -> &[String] {
        &self.live
    }

    /// Retire every live chart and register `specs` as the new set.
    /// An empty `specs` only tears down.
    pub fn replace(&mut self, mut specs: Vec<BarChartSpec>) -> ChartBatch {
        self.generation += 1;
        for (i, spec) in specs.iter_mut().enumerate() {
            spec.id = format!("{}-chart-{}-{}", self.prefix, self.generation, i);
        }
        let destroy = std::mem::replace(
            &mut self.live,
            specs.iter().map(|s| s.id.clone()).collect(),
        );
        ChartBatch {
            destroy,
            create: specs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str) -> BarChartSpec {
        BarChartSpec::new(title, "Trips", "rgba(0, 0, 0, 1)")
    }

    #[test]
    fn replace_destroys_exactly_the_previous_render() {
        let mut registry = ChartRegistry::new("q2");
        let first = registry.replace(vec![spec("a"), spec("b")]);
        assert!(first.destroy.is_empty());
        let first_ids: Vec<String> = first.create.iter().map(|s| s.id.clone()).collect();
        assert_eq!(first_ids, vec!["q2-chart-1-0", "q2-chart-1-1"]);

        let second = registry.replace(vec![spec("c")]);
        assert_eq!(second.destroy, first_ids);
        assert_eq!(registry.live().to_vec(), vec!["q2-chart-2-0"]);

        let third = registry.replace(Vec::new());
        assert_eq!(third.destroy, vec!["q2-chart-2-0"]);
        assert!(third.create.is_empty());
        assert!(registry.live().is_empty());
    }

    #[test]
    fn fixed_width_grows_with_label_count() {
        assert_eq!(
            ChartSize::fixed_for_labels(5, 320),
            ChartSize::Fixed { min_width: 600, height: 320 }
        );
        assert_eq!(
            ChartSize::fixed_for_labels(50, 320),
            ChartSize::Fixed { min_width: 900, height: 320 }
        );
    }

    #[test]
    fn static_layout_disables_animation() {
        let spec = spec("a")
            .with_series(vec!["x".into(); 40], vec![1.0; 40])
            .static_layout(320);
        assert!(!spec.animation);
        assert!(spec.dense_ticks);
        assert_eq!(spec.size, ChartSize::Fixed { min_width: 720, height: 320 });
    }
}
