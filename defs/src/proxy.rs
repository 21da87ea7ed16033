use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// The subset of an API Gateway proxy event the inference handler reads.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ProxyEvent {
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ProxyEvent {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
}

impl ProxyResponse {
    pub fn predictions(predictions: &str) -> Self {
        ProxyResponse {
            status_code: 200,
            body: json!({ "predictions": predictions }).to_string(),
        }
    }

    pub fn message(status_code: u16, message: &str) -> Self {
        ProxyResponse {
            status_code,
            body: json!({ "message": message }).to_string(),
        }
    }
}
