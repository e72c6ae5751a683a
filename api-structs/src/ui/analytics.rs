use backtraced_error::SerdeJsonError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of `GET /api/health-analytics`: the risk probabilities of a single
/// prediction, as percentages.
///
/// Every field decodes leniently so a single bad row never fails the whole list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    /// Server side `"Mar 2024"` label, informational only
    #[serde(default, deserialize_with = "lenient_string")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "lenient_probability")]
    pub stroke_probability: Option<f64>,
    #[serde(default, deserialize_with = "lenient_probability")]
    pub cardio_probability: Option<f64>,
    #[serde(default, deserialize_with = "lenient_probability")]
    pub diabetes_probability: Option<f64>,
}

/// Numbers and numeric strings are probabilities, anything else is absent.
pub fn probability_from_json(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn lenient_probability<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(probability_from_json(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

pub fn parse_health_metrics(body: &str) -> Result<Vec<HealthMetric>, SerdeJsonError> {
    serde_json::from_str(body).map_err(|e| {
        SerdeJsonError::from_serde_json_error(e, "decoding health analytics response", body)
    })
}
