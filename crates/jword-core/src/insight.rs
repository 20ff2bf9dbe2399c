//! Insight records shown on the analyzer results view.
//!
//! Insights are static content: the analyzer does not parse the
//! uploaded document, so every analysis shows the same fixed, ordered
//! list. Real scoring is out of scope for now.

use serde::{Deserialize, Serialize};

/// Sentiment of an insight, which selects its row icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Negative,
    Neutral,
}

impl InsightKind {
    /// Display label for the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

/// One feedback row: a headline plus a longer suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub headline: String,
    pub suggestion: String,
}

impl Insight {
    #[must_use]
    pub fn new(
        kind: InsightKind,
        headline: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            headline: headline.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// The fixed insight list rendered for every analysis.
#[must_use]
pub fn placeholder_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            InsightKind::Positive,
            "Strong Action Verbs",
            "Your document effectively uses impactful action verbs.",
        ),
        Insight::new(
            InsightKind::Negative,
            "Formatting Issues Detected",
            "Complex tables or columns might not be parsed correctly by all systems.",
        ),
        Insight::new(
            InsightKind::Neutral,
            "Keyword Optimization",
            "Consider adding keywords like \"Project Management\" and \"Agile\".",
        ),
        Insight::new(
            InsightKind::Positive,
            "Clear Contact Information",
            "Contact details are easy to find and parse.",
        ),
        Insight::new(
            InsightKind::Negative,
            "Repetitive Phrasing",
            "The phrase \"responsible for\" is used multiple times. Consider diversifying your language.",
        ),
        Insight::new(
            InsightKind::Neutral,
            "Document Length",
            "The document is a single page, which is ideal for most applications.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_list_is_fixed_and_ordered() {
        let insights = placeholder_insights();
        assert_eq!(insights.len(), 6);
        assert_eq!(insights[0].headline, "Strong Action Verbs");
        assert_eq!(insights[0].kind, InsightKind::Positive);
        assert_eq!(insights[1].kind, InsightKind::Negative);
        assert_eq!(insights[2].kind, InsightKind::Neutral);
        // Same content on every call.
        assert_eq!(insights, placeholder_insights());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&InsightKind::Positive).unwrap_or_default();
        assert_eq!(json, "\"positive\"");
    }

    #[test]
    fn kind_labels() {
        assert_eq!(InsightKind::Negative.label(), "Negative");
        assert_eq!(InsightKind::Neutral.label(), "Neutral");
    }
}
