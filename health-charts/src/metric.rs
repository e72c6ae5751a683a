use api_structs::ui::analytics::HealthMetric;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Stroke,
    Cardio,
    Diabetes,
}

impl Metric {
    /// Series are always emitted in this order.
    pub const ALL: [Metric; 3] = [Metric::Stroke, Metric::Cardio, Metric::Diabetes];

    /// Key of this metric in API rows and in a selection map.
    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::Stroke => "strokeProbability",
            Metric::Cardio => "cardioProbability",
            Metric::Diabetes => "diabetesProbability",
        }
    }

    pub fn series_name(&self) -> &'static str {
        match self {
            Metric::Stroke => "Stroke Probability (%)",
            Metric::Cardio => "Cardio Probability (%)",
            Metric::Diabetes => "Diabetes Probability (%)",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Metric::Stroke => "Stroke Probability",
            Metric::Cardio => "Cardio Probability",
            Metric::Diabetes => "Diabetes Probability",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Metric::Stroke => "#1976d2",
            Metric::Cardio => "#ff7043",
            Metric::Diabetes => "#42a5f5",
        }
    }

    /// The raw, uncoerced value of this metric in an API row.
    pub fn raw_value(&self, row: &HealthMetric) -> Option<f64> {
        match self {
            Metric::Stroke => row.stroke_probability,
            Metric::Cardio => row.cardio_probability,
            Metric::Diabetes => row.diabetes_probability,
        }
    }
}

impl FromStr for Metric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.field_name() == s)
            .ok_or(())
    }
}

/// Which metrics the analytics view currently plots.
///
/// In the map form a missing key means unselected, same as [MetricSelection::from_flags].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetricSelection {
    #[serde(default, rename = "strokeProbability")]
    pub stroke: bool,
    #[serde(default, rename = "cardioProbability")]
    pub cardio: bool,
    #[serde(default, rename = "diabetesProbability")]
    pub diabetes: bool,
}

impl Default for MetricSelection {
    fn default() -> Self {
        Self {
            stroke: true,
            cardio: true,
            diabetes: true,
        }
    }
}

impl MetricSelection {
    pub fn none() -> Self {
        Self {
            stroke: false,
            cardio: false,
            diabetes: false,
        }
    }

    /// Builds a selection from `(field name, flag)` pairs. Unknown keys are ignored
    /// and metrics that are not mentioned stay unselected.
    pub fn from_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut selection = Self::none();
        for (key, flag) in flags {
            if let Ok(metric) = Metric::from_str(key) {
                selection.set(metric, flag);
            }
        }
        selection
    }

    pub fn is_selected(&self, metric: Metric) -> bool {
        match metric {
            Metric::Stroke => self.stroke,
            Metric::Cardio => self.cardio,
            Metric::Diabetes => self.diabetes,
        }
    }

    pub fn set(&mut self, metric: Metric, selected: bool) {
        match metric {
            Metric::Stroke => self.stroke = selected,
            Metric::Cardio => self.cardio = selected,
            Metric::Diabetes => self.diabetes = selected,
        }
    }

    pub fn toggle(&mut self, metric: Metric) {
        let selected = self.is_selected(metric);
        self.set(metric, !selected);
    }

    /// Selected metrics in series order.
    pub fn selected(&self) -> impl Iterator<Item = Metric> {
        let selection = *self;
        Metric::ALL
            .into_iter()
            .filter(move |m| selection.is_selected(*m))
    }

    pub fn is_empty(&self) -> bool {
        self.selected().next().is_none()
    }
}

#[cfg(test)]
mod test {
    use crate::metric::{Metric, MetricSelection};

    #[test]
    fn everything_is_plotted_initially() {
        let selection = MetricSelection::default();
        assert_eq!(selection.selected().collect::<Vec<_>>(), Metric::ALL.to_vec());
    }

    #[test]
    fn toggling_flips_a_single_metric() {
        let mut selection = MetricSelection::default();
        selection.toggle(Metric::Cardio);
        assert_eq!(
            selection.selected().collect::<Vec<_>>(),
            vec![Metric::Stroke, Metric::Diabetes]
        );
        selection.toggle(Metric::Cardio);
        assert!(selection.is_selected(Metric::Cardio));
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let selection = MetricSelection::from_flags([
            ("strokeProbability", true),
            ("bmi", true),
            ("diabetesProbability", false),
        ]);
        assert_eq!(selection.selected().collect::<Vec<_>>(), vec![Metric::Stroke]);
        assert!(MetricSelection::from_flags([("bmi", true)]).is_empty());
    }

    #[test]
    fn decodes_from_toggle_map() {
        let selection: MetricSelection = serde_json::from_str(
            r#"{"strokeProbability": true, "cardioProbability": false,
                "diabetesProbability": true, "heartRate": true}"#,
        )
        .unwrap();
        assert_eq!(
            selection,
            MetricSelection {
                stroke: true,
                cardio: false,
                diabetes: true,
            }
        );
    }

    #[test]
    fn partial_map_agrees_with_flags() {
        let decoded: MetricSelection =
            serde_json::from_str(r#"{"strokeProbability": true, "bmi": true}"#).unwrap();
        let built = MetricSelection::from_flags([("strokeProbability", true), ("bmi", true)]);
        assert_eq!(decoded, built);
        assert_eq!(decoded.selected().collect::<Vec<_>>(), vec![Metric::Stroke]);

        let empty: MetricSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, MetricSelection::none());
    }
}
