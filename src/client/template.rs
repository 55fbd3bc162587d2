//! Request template files
//!
//! A template is a JSON object: `{"url": ..., "method": ..., "body": ..., "headers": {...}}`.
//! Every field is optional; missing url or method is caught by request validation.

use crate::error::ClientError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct RequestTemplate {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub body: serde_json::Value,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl RequestTemplate {
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Body as text; strings are sent as-is, other JSON values serialized
    pub fn body_text(&self) -> Option<String> {
        match &self.body {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
