//! Request descriptors.

use serde::Serialize;
use serde_json::Value;

use mitra_api::{Endpoint, Method};

use crate::error::ApiError;

/// Everything needed to issue one request: method, rendered path, query
/// pairs and an optional JSON body.
///
/// A descriptor is built fresh for each call and consumed by
/// [`ApiClient::call`](crate::ApiClient::call).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the `/api` prefix, e.g. `/students/s-1/moods`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Describe a call to `endpoint`, filling its path placeholders in order.
    pub fn new(endpoint: Endpoint, params: &[&str]) -> Result<Self, ApiError> {
        Ok(Self {
            method: endpoint.method(),
            path: endpoint.path(params)?,
            query: Vec::new(),
            body: None,
        })
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::transport(format!("could not encode request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mitra::MoodEntryForm;
    use serde_json::json;

    #[test]
    fn descriptor_from_catalog() {
        let form = MoodEntryForm {
            mood: 4,
            notes: None,
            factors: vec!["Sleep issues".into()],
        };
        let d = RequestDescriptor::new(Endpoint::CreateMood, &["s-1"])
            .unwrap()
            .body(&form)
            .unwrap();
        assert_eq!(d.method, Method::Post);
        assert_eq!(d.path, "/students/s-1/moods");
        assert_eq!(d.body, Some(json!({"mood": 4, "factors": ["Sleep issues"]})));
    }

    #[test]
    fn missing_path_param_is_a_transport_error() {
        let err = RequestDescriptor::new(Endpoint::GetMood, &["s-1"]).unwrap_err();
        assert_eq!(err.status(), 0);
    }

    #[test]
    fn query_pairs_accumulate() {
        let d = RequestDescriptor::new(Endpoint::AnalyticsDashboard, &["s-1"])
            .unwrap()
            .query("period", "week");
        assert_eq!(d.query, [("period".to_string(), "week".to_string())]);
        assert!(d.body.is_none());
    }
}
