//! Upper bound of the probability axis.
//!
//! The bound is always a multiple of 10 within `[10, 100]` and leaves at least
//! some headroom above the tallest plotted value, until it saturates at 100.
use crate::deriver::NamedSeries;

const HEADROOM: f64 = 5.0;
const STEP: f64 = 10.0;
const FLOOR: f64 = 10.0;
const CEILING: f64 = 100.0;

/// Only the emitted series count, hidden metrics never stretch the axis.
pub fn y_axis_max(series: &[NamedSeries]) -> u32 {
    let max_value = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    bound_for_max_value(max_value)
}

pub fn bound_for_max_value(max_value: f64) -> u32 {
    let padded = (max_value + HEADROOM).clamp(0.0, CEILING);
    let rounded = (padded / STEP).ceil() * STEP;
    rounded.clamp(FLOOR, CEILING) as u32
}

#[cfg(test)]
mod test {
    use crate::y_axis::bound_for_max_value;

    #[test]
    fn rounds_padded_max_up_to_next_ten() {
        assert_eq!(bound_for_max_value(42.0), 50);
        assert_eq!(bound_for_max_value(45.0), 50);
        assert_eq!(bound_for_max_value(45.1), 60);
    }

    #[test]
    fn saturates_at_one_hundred() {
        assert_eq!(bound_for_max_value(97.0), 100);
        assert_eq!(bound_for_max_value(250.0), 100);
    }

    #[test]
    fn never_below_ten() {
        assert_eq!(bound_for_max_value(0.0), 10);
        assert_eq!(bound_for_max_value(-30.0), 10);
        assert_eq!(bound_for_max_value(4.9), 10);
        assert_eq!(bound_for_max_value(5.1), 20);
    }
}
