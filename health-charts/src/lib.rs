//! Turns the health analytics rows returned by the API into render ready chart input:
//! x-axis labels, one series per selected metric and a y-axis upper bound.
pub mod aggregation;
pub mod config;
pub mod deriver;
pub mod granularity;
pub mod metric;
pub mod observation;
pub mod tick_labels;
pub mod y_axis;

pub use config::DeriverConfig;
pub use deriver::{derive, DerivedChart, NamedSeries, SeriesDeriver};
pub use granularity::Granularity;
pub use metric::{Metric, MetricSelection};
