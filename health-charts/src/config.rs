use api_structs::time_conversion::LocalTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeriverConfig {
    /// Spans longer than this many whole days are bucketed by month
    pub monthly_span_days_threshold: i64,
    /// More observations than this are bucketed by month
    pub monthly_count_threshold: usize,
    /// Axis top used when there is nothing to plot
    pub empty_y_axis_max: u32,
    /// Wall clock that offset carrying dates are moved into
    pub local_time: LocalTime,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            monthly_span_days_threshold: 180,
            monthly_count_threshold: 20,
            empty_y_axis_max: 60,
            local_time: LocalTime::FixedOffsetMinutes(0),
        }
    }
}

impl DeriverConfig {
    pub fn with_local_time(self, local_time: LocalTime) -> Self {
        Self {
            local_time,
            ..self
        }
    }
}
