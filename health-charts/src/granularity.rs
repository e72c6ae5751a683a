use crate::config::DeriverConfig;
use crate::observation::Observation;
use chrono::Datelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One point per observation, labelled `YYYY-MM-DD`
    Daily,
    /// One mean point per calendar month, labelled `Mon YYYY`
    Monthly,
}

impl Granularity {
    /// Wide or dense ranges are summarized by month to keep the x-axis legible.
    ///
    /// `sorted` must be in ascending time order. Only the observations decide,
    /// never which metrics are selected.
    pub fn choose(sorted: &[Observation], config: &DeriverConfig) -> Self {
        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return Granularity::Daily;
        };
        let crosses_year_boundary = first.timestamp.year() != last.timestamp.year();
        let span_days = (last.timestamp - first.timestamp).num_days();
        if crosses_year_boundary
            || span_days > config.monthly_span_days_threshold
            || sorted.len() > config.monthly_count_threshold
        {
            Granularity::Monthly
        } else {
            Granularity::Daily
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::DeriverConfig;
    use crate::granularity::Granularity;
    use crate::observation::Observation;
    use chrono::{Duration, NaiveDate};

    fn observations_from(start: (i32, u32, u32), count: usize, step_days: i64) -> Vec<Observation> {
        let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        (0..count)
            .map(|i| Observation {
                timestamp: start + Duration::days(step_days * i as i64),
                stroke: 1.0,
                cardio: 1.0,
                diabetes: 1.0,
            })
            .collect()
    }

    #[test]
    fn small_short_range_is_daily() {
        let config = DeriverConfig::default();
        let sorted = observations_from((2024, 3, 1), 20, 1);
        assert_eq!(Granularity::choose(&sorted, &config), Granularity::Daily);
    }

    #[test]
    fn more_than_twenty_points_is_monthly() {
        let config = DeriverConfig::default();
        let sorted = observations_from((2024, 3, 1), 21, 1);
        assert_eq!(Granularity::choose(&sorted, &config), Granularity::Monthly);
    }

    #[test]
    fn span_threshold_is_exclusive() {
        let config = DeriverConfig::default();
        let exactly_180 = observations_from((2024, 1, 10), 2, 180);
        assert_eq!(Granularity::choose(&exactly_180, &config), Granularity::Daily);
        let over_180 = observations_from((2024, 1, 10), 2, 181);
        assert_eq!(Granularity::choose(&over_180, &config), Granularity::Monthly);
    }

    #[test]
    fn new_year_forces_monthly() {
        let config = DeriverConfig::default();
        let sorted = observations_from((2023, 12, 31), 2, 2);
        assert_eq!(Granularity::choose(&sorted, &config), Granularity::Monthly);
    }

    #[test]
    fn thresholds_come_from_config() {
        let config = DeriverConfig {
            monthly_count_threshold: 3,
            ..Default::default()
        };
        let sorted = observations_from((2024, 3, 1), 4, 1);
        assert_eq!(Granularity::choose(&sorted, &config), Granularity::Monthly);
    }
}
