//! Shortens x-axis tick text on narrow screens. Only the rendered text changes,
//! the labels and series the ticks belong to are left alone.

/// Above this many points every other interior tick is hidden.
const MIN_POINTS_FOR_THINNING: usize = 6;

pub fn format_tick_label(label: &str, index: usize, total: usize, narrow: bool) -> String {
    if label.is_empty() || !narrow {
        return label.to_string();
    }

    let interior = index > 0 && index + 1 < total;
    if interior && total > MIN_POINTS_FOR_THINNING && index % 2 == 1 {
        return String::new();
    }

    if is_iso_date(label) {
        // YYYY-MM-DD -> MM/DD
        return format!("{}/{}", &label[5..7], &label[8..10]);
    }

    let mut parts = label.split(' ');
    if let (Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next()) {
        if year.chars().count() == 4 {
            return month.to_string();
        }
    }

    label.to_string()
}

/// Same length as `labels`, position by position.
pub fn format_tick_labels(labels: &[String], narrow: bool) -> Vec<String> {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| format_tick_label(label, index, labels.len(), narrow))
        .collect()
}

fn is_iso_date(label: &str) -> bool {
    let bytes = label.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod test {
    use crate::tick_labels::{format_tick_label, format_tick_labels};

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wide_screens_are_untouched() {
        let input = labels(&["2024-03-01", "2024-03-02", "2024-03-03"]);
        assert_eq!(format_tick_labels(&input, false), input);
    }

    #[test]
    fn dates_and_months_are_abbreviated() {
        assert_eq!(format_tick_label("2024-03-09", 0, 2, true), "03/09");
        assert_eq!(format_tick_label("Mar 2024", 1, 2, true), "Mar");
        assert_eq!(format_tick_label("Mar 24", 0, 1, true), "Mar 24");
        assert_eq!(format_tick_label("2024-3-9", 0, 1, true), "2024-3-9");
    }

    #[test]
    fn every_other_interior_tick_is_hidden_past_six_points() {
        let input = labels(&[
            "Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024", "Jun 2024", "Jul 2024",
            "Aug 2024",
        ]);
        let formatted = format_tick_labels(&input, true);
        insta::assert_debug_snapshot!(formatted, @r###"
        [
            "Jan",
            "",
            "Mar",
            "",
            "May",
            "",
            "Jul",
            "Aug",
        ]
        "###);
    }

    #[test]
    fn six_points_keep_every_tick() {
        let input = labels(&[
            "2024-03-01",
            "2024-03-02",
            "2024-03-03",
            "2024-03-04",
            "2024-03-05",
            "2024-03-06",
        ]);
        let formatted = format_tick_labels(&input, true);
        assert!(formatted.iter().all(|l| !l.is_empty()));
        assert_eq!(formatted[5], "03/06");
    }

    #[test]
    fn empty_label_passes_through() {
        assert_eq!(format_tick_label("", 3, 10, true), "");
    }
}
