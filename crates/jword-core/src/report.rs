//! The analysis report: score plus insights.
//!
//! Rendered on the analyzer results view and downloadable as JSON.

use serde::{Deserialize, Serialize};

use crate::insight::{Insight, placeholder_insights};

/// Score shown while real scoring is unimplemented.
const PLACEHOLDER_SCORE: u8 = 88;

/// A scored analysis of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Overall score, 0-100.
    pub score: u8,
    /// Ordered feedback rows.
    pub insights: Vec<Insight>,
}

impl AnalysisReport {
    /// The canned report every analysis currently produces.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            score: PLACEHOLDER_SCORE,
            insights: placeholder_insights(),
        }
    }

    /// Pretty-printed JSON for the report download.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_report_is_stable() {
        let report = AnalysisReport::placeholder();
        assert_eq!(report.score, 88);
        assert_eq!(report.insights.len(), 6);
    }

    #[test]
    fn json_contains_score_and_insight_fields() {
        let json = AnalysisReport::placeholder().to_json().unwrap_or_default();
        assert!(json.contains("\"score\": 88"));
        assert!(json.contains("\"kind\": \"positive\""));
        assert!(json.contains("Strong Action Verbs"));
    }
}
