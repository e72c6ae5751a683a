use crate::granularity::Granularity;
use crate::metric::Metric;
use crate::observation::Observation;
use chrono::Datelike;
use std::collections::BTreeMap;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Mean of every metric over the observations of one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub year: i32,
    /// 1 to 12
    pub month: u32,
    pub members: usize,
    pub stroke: f64,
    pub cardio: f64,
    pub diabetes: f64,
}

impl MonthlyBucket {
    fn from_members(year: i32, month: u32, members: &[&Observation]) -> Self {
        let mean = |metric: Metric| {
            let n = members.len().max(1) as f64;
            members.iter().map(|o| o.value(metric)).sum::<f64>() / n
        };
        Self {
            year,
            month,
            members: members.len(),
            stroke: mean(Metric::Stroke),
            cardio: mean(Metric::Cardio),
            diabetes: mean(Metric::Diabetes),
        }
    }

    pub fn label(&self) -> String {
        let abbreviation = MONTH_ABBREVIATIONS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("???");
        format!("{} {}", abbreviation, self.year)
    }
}

/// One x-axis position.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregatedPoint {
    Raw(Observation),
    Monthly(MonthlyBucket),
}

impl AggregatedPoint {
    pub fn label(&self) -> String {
        match self {
            AggregatedPoint::Raw(observation) => {
                observation.timestamp.format("%Y-%m-%d").to_string()
            }
            AggregatedPoint::Monthly(bucket) => bucket.label(),
        }
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match self {
            AggregatedPoint::Raw(observation) => observation.value(metric),
            AggregatedPoint::Monthly(bucket) => match metric {
                Metric::Stroke => bucket.stroke,
                Metric::Cardio => bucket.cardio,
                Metric::Diabetes => bucket.diabetes,
            },
        }
    }
}

/// `sorted` must be in ascending time order.
pub fn aggregate(sorted: &[Observation], granularity: Granularity) -> Vec<AggregatedPoint> {
    match granularity {
        Granularity::Daily => sorted.iter().cloned().map(AggregatedPoint::Raw).collect(),
        Granularity::Monthly => monthly_buckets(sorted)
            .into_iter()
            .map(AggregatedPoint::Monthly)
            .collect(),
    }
}

/// One bucket per distinct (year, month), in calendar order.
pub fn monthly_buckets(observations: &[Observation]) -> Vec<MonthlyBucket> {
    let mut groups: BTreeMap<(i32, u32), Vec<&Observation>> = BTreeMap::new();
    for o in observations {
        groups
            .entry((o.timestamp.year(), o.timestamp.month()))
            .or_default()
            .push(o);
    }
    groups
        .into_iter()
        .map(|((year, month), members)| MonthlyBucket::from_members(year, month, &members))
        .collect()
}
