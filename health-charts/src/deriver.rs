use crate::aggregation::{aggregate, AggregatedPoint};
use crate::config::DeriverConfig;
use crate::granularity::Granularity;
use crate::metric::{Metric, MetricSelection};
use crate::observation::{coerce_probability, parse_and_sort};
use crate::y_axis::y_axis_max;
use api_structs::ui::analytics::HealthMetric;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub metric: Metric,
    pub name: String,
    pub color: String,
    /// One value per label
    pub values: Vec<f64>,
}

impl NamedSeries {
    fn from_points(metric: Metric, points: &[AggregatedPoint]) -> Self {
        Self {
            metric,
            name: metric.series_name().to_string(),
            color: metric.color().to_string(),
            values: points
                .iter()
                .map(|p| coerce_probability(Some(p.value(metric))))
                .collect(),
        }
    }
}

/// Everything the chart renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedChart {
    pub labels: Vec<String>,
    pub series: Vec<NamedSeries>,
    pub y_axis_max: u32,
    /// `None` when no observation survived parsing
    pub granularity: Option<Granularity>,
}

impl DerivedChart {
    pub fn empty(config: &DeriverConfig) -> Self {
        Self {
            labels: vec![],
            series: vec![],
            y_axis_max: config.empty_y_axis_max,
            granularity: None,
        }
    }

    /// With nothing selected the caller shows a placeholder instead of an empty chart.
    pub fn has_renderable_series(&self) -> bool {
        !self.series.is_empty() && !self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesDeriver {
    pub config: DeriverConfig,
}

impl SeriesDeriver {
    pub fn new(config: DeriverConfig) -> Self {
        Self { config }
    }

    /// Never fails: undated rows are dropped and an empty result still has a usable axis.
    pub fn derive(&self, rows: &[HealthMetric], selection: &MetricSelection) -> DerivedChart {
        let sorted = parse_and_sort(rows, &self.config.local_time);
        if sorted.is_empty() {
            debug!(rows = rows.len(), "No dated rows, deriving empty chart");
            return DerivedChart::empty(&self.config);
        }

        let granularity = Granularity::choose(&sorted, &self.config);
        let points = aggregate(&sorted, granularity);
        let labels: Vec<String> = points.iter().map(AggregatedPoint::label).collect();
        let series: Vec<NamedSeries> = selection
            .selected()
            .map(|metric| NamedSeries::from_points(metric, &points))
            .collect();
        let y_axis_max = y_axis_max(&series);
        debug!(
            kept = sorted.len(),
            dropped = rows.len() - sorted.len(),
            points = points.len(),
            series = series.len(),
            y_axis_max,
            "Derived {:?} chart",
            granularity
        );
        DerivedChart {
            labels,
            series,
            y_axis_max,
            granularity: Some(granularity),
        }
    }
}

/// [SeriesDeriver::derive] with the default configuration (UTC calendar).
pub fn derive(rows: &[HealthMetric], selection: &MetricSelection) -> DerivedChart {
    SeriesDeriver::default().derive(rows, selection)
}
