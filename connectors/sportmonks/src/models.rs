//! Sportmonks API data models

use serde::Deserialize;
use serde_json::Value;

/// Envelope of `GET /fixtures/today`
///
/// Records stay as raw values so a bad one can be reported by position.
/// `meta` is only read for a pagination warning, so its shape is never
/// allowed to fail the request.
#[derive(Debug, Deserialize)]
pub struct FixturesEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
    #[serde(default)]
    pub meta: Option<Value>,
}

impl FixturesEnvelope {
    /// Pagination block, if it carries the numbers we log
    pub fn pagination(&self) -> Option<Pagination> {
        let pagination = self.meta.as_ref()?.get("pagination")?;
        Some(Pagination {
            total: pagination.get("total").and_then(Value::as_u64),
            current_page: pagination.get("current_page")?.as_u64()?,
            total_pages: pagination.get("total_pages")?.as_u64()?,
        })
    }
}

#[derive(Debug, PartialEq)]
pub struct Pagination {
    pub total: Option<u64>,
    pub current_page: u64,
    pub total_pages: u64,
}

/// Sportmonks error response
#[derive(Debug, Deserialize)]
pub struct SportmonksError {
    pub error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    #[serde(default)]
    pub code: Option<u16>,
}
