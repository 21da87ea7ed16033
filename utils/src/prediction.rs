use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionParseError {
    #[error("Prediction response is empty")]
    Empty,

    #[error("Expected a single prediction but found {0}")]
    NotSingular(usize),

    #[error("Prediction '{0}' is not a finite number")]
    NotNumeric(String),
}

/// Extracts the one scalar an endpoint returned for a one-record request.
///
/// Accepts plain text (`9.87`), a single CSV/line-separated value, or JSON shaped as a number,
/// a one-element array, `{"predictions": ...}` or `{"score": ...}`.
pub fn parse_scalar_prediction(text: &str) -> Result<f64, PredictionParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PredictionParseError::Empty);
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return scalar_from_json(&value);
    }

    let values: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c == '\n')
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    match values.as_slice() {
        [single] => parse_finite(single),
        _ => Err(PredictionParseError::NotSingular(values.len())),
    }
}

fn scalar_from_json(value: &Value) -> Result<f64, PredictionParseError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PredictionParseError::NotNumeric(n.to_string())),
        Value::String(s) => parse_finite(s.trim()),
        Value::Array(items) => match items.as_slice() {
            [single] => scalar_from_json(single),
            _ => Err(PredictionParseError::NotSingular(items.len())),
        },
        Value::Object(map) => match map.get("predictions").or_else(|| map.get("score")) {
            Some(inner) => scalar_from_json(inner),
            None => Err(PredictionParseError::NotNumeric(value.to_string())),
        },
        other => Err(PredictionParseError::NotNumeric(other.to_string())),
    }
}

fn parse_finite(raw: &str) -> Result<f64, PredictionParseError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PredictionParseError::NotNumeric(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_prediction() {
        assert_eq!(parse_scalar_prediction("9.0\n"), Ok(9.0));
        assert_eq!(parse_scalar_prediction(" 8.734 "), Ok(8.734));
    }

    #[test]
    fn test_csv_single_value() {
        assert_eq!(parse_scalar_prediction("10.2,"), Ok(10.2));
    }

    #[test]
    fn test_csv_multiple_values_rejected() {
        assert_eq!(
            parse_scalar_prediction("1.0,2.0"),
            Err(PredictionParseError::NotSingular(2))
        );
    }

    #[test]
    fn test_structured_predictions() {
        assert_eq!(parse_scalar_prediction("[9.5]"), Ok(9.5));
        assert_eq!(
            parse_scalar_prediction(r#"{"predictions": [{"score": 8.25}]}"#),
            Ok(8.25)
        );
        assert_eq!(parse_scalar_prediction(r#"{"score": "7"}"#), Ok(7.0));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert_eq!(parse_scalar_prediction(""), Err(PredictionParseError::Empty));
        assert!(parse_scalar_prediction("NaN").is_err());
        assert!(parse_scalar_prediction("not a number").is_err());
        assert!(parse_scalar_prediction(r#"{"label": 1}"#).is_err());
    }
}
