//! Fixture records from the sports-data provider and the match summaries
//! derived from them.
//!
//! Deserialization is strict on the presence of the fields we read: a record
//! without `localteam_name`, `visitorteam_name` or either `scores` entry fails
//! to parse, and the fixture source turns that into a failure for the whole
//! batch. Values are taken as-is, so a `null` name or score still renders.
//! Every other upstream field is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single fixture as returned by the provider's `fixtures/today` endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FixtureRecord {
    pub localteam_name: Value,
    pub visitorteam_name: Value,
    pub scores: FixtureScores,
}

/// Nested score object of a fixture
///
/// Scores stay as raw JSON values since the provider sends integers for
/// played matches and `null` for ones that have not kicked off.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FixtureScores {
    pub localteam_score: Value,
    pub visitorteam_score: Value,
}

/// Simplified match summary returned by `GET /predict-today`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPrediction {
    #[serde(rename = "match")]
    pub fixture: String,
    pub score: String,
}

impl MatchPrediction {
    pub fn new(home: &str, away: &str, home_score: &str, away_score: &str) -> Self {
        Self {
            fixture: format!("{} vs {}", home, away),
            score: format!("{} - {}", home_score, away_score),
        }
    }
}

impl From<&FixtureRecord> for MatchPrediction {
    fn from(record: &FixtureRecord) -> Self {
        Self::new(
            &render_value(&record.localteam_name),
            &render_value(&record.visitorteam_name),
            &render_value(&record.scores.localteam_score),
            &render_value(&record.scores.visitorteam_score),
        )
    }
}

/// Summarize fixtures in the order the provider returned them
pub fn summarize(records: &[FixtureRecord]) -> Vec<MatchPrediction> {
    records.iter().map(MatchPrediction::from).collect()
}

/// Strings render without quotes, everything else as its JSON text
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
