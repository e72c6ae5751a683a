use crate::metric::Metric;
use api_structs::time_conversion::{parse_local_date_time, LocalTime};
use api_structs::ui::analytics::HealthMetric;
use chrono::NaiveDateTime;
use tracing::trace;

/// A [HealthMetric] whose date parsed, with every metric coerced to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Local wall clock time
    pub timestamp: NaiveDateTime,
    pub stroke: f64,
    pub cardio: f64,
    pub diabetes: f64,
}

/// Absent and non finite values count as `0.0`, a real zero stays zero.
pub fn coerce_probability(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl Observation {
    /// `None` when the row has no date or the date does not parse.
    pub fn from_health_metric(row: &HealthMetric, local_time: &LocalTime) -> Option<Self> {
        let Some(raw_date) = row.date.as_deref() else {
            trace!("Discarding row without a date: {:?}", row);
            return None;
        };
        let Some(timestamp) = parse_local_date_time(raw_date, local_time) else {
            trace!("Discarding row with unparsable date {:?}", raw_date);
            return None;
        };
        Some(Self {
            timestamp,
            stroke: coerce_probability(Metric::Stroke.raw_value(row)),
            cardio: coerce_probability(Metric::Cardio.raw_value(row)),
            diabetes: coerce_probability(Metric::Diabetes.raw_value(row)),
        })
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Stroke => self.stroke,
            Metric::Cardio => self.cardio,
            Metric::Diabetes => self.diabetes,
        }
    }
}

/// Parses every row, drops the undated ones and sorts the rest by time.
/// Rows sharing a timestamp keep their input order.
pub fn parse_and_sort(rows: &[HealthMetric], local_time: &LocalTime) -> Vec<Observation> {
    let mut observations: Vec<Observation> = rows
        .iter()
        .filter_map(|row| Observation::from_health_metric(row, local_time))
        .collect();
    observations.sort_by_key(|o| o.timestamp);
    observations
}
