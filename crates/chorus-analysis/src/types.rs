use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AnalysisError;

/// Lightweight sentiment extraction for one chunk of comments.
///
/// `Default` is the neutral fallback used when a chunk response cannot be
/// parsed: all zeros and empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialResult {
    /// Model-estimated share of positive comments, 0–100.
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub praise: Vec<String>,
    pub pain: Vec<String>,
    pub themes: Vec<String>,
}

impl PartialResult {
    /// Build a partial result from any parsed JSON value.
    ///
    /// Missing or non-numeric percentages become `0.0`; numeric strings such
    /// as `"60"` or `"60%"` are accepted. Missing or non-array lists become
    /// empty. A value that is not an object yields the neutral fallback.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            pos: coerce_number(value.get("pos")),
            neg: coerce_number(value.get("neg")),
            neu: coerce_number(value.get("neu")),
            praise: coerce_list(value.get("praise")),
            pain: coerce_list(value.get("pain")),
            themes: coerce_list(value.get("themes")),
        }
    }
}

fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s
            .trim()
            .trim_end_matches('%')
            .trim_end()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn coerce_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .collect()
}

/// Cross-chunk merge of every [`PartialResult`] in a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub pos_avg: f64,
    pub neg_avg: f64,
    pub neu_avg: f64,
    pub praise: Vec<String>,
    pub pain: Vec<String>,
    pub themes: Vec<String>,
}

impl Aggregate {
    /// JSON form embedded verbatim in the synthesis prompt.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "posAvg": self.pos_avg,
            "negAvg": self.neg_avg,
            "neuAvg": self.neu_avg,
            "praise": self.praise,
            "pain": self.pain,
            "themes": self.themes,
        })
    }
}

/// Final premium report returned to the caller.
///
/// The three percentages are always the rounded chunk averages. Every other
/// field is passed through from the synthesis response as the model wrote it,
/// including keys this type does not name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "positivePercentage")]
    pub positive_percentage: i64,
    #[serde(rename = "negativePercentage")]
    pub negative_percentage: i64,
    #[serde(rename = "neutralPercentage")]
    pub neutral_percentage: i64,
    #[serde(
        rename = "sentimentSummary_premium",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment_summary: Option<Value>,
    #[serde(
        rename = "topPraise_premium",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub top_praise: Option<Value>,
    #[serde(
        rename = "topPainPoints_premium",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub top_pain_points: Option<Value>,
    #[serde(
        rename = "strategicOpportunity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub strategic_opportunity: Option<Value>,
    #[serde(
        rename = "audienceDeepProfile",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub audience_deep_profile: Option<Value>,
    #[serde(
        rename = "contentIdeas",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_ideas: Option<Value>,
    #[serde(
        rename = "engagementPatterns",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub engagement_patterns: Option<Value>,
    #[serde(
        rename = "actionableInsight_premium",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub actionable_insight: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Report {
    /// Build the report from a parsed synthesis response.
    ///
    /// Whatever the model wrote for the three percentage keys is dropped and
    /// replaced by the rounded averages in `aggregate`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::SynthesisShape`] if `value` is not a JSON object.
    pub fn from_synthesis(value: Value, aggregate: &Aggregate) -> Result<Self, AnalysisError> {
        let mut fields = match value {
            Value::Object(map) => map,
            other => return Err(AnalysisError::SynthesisShape(json_kind(&other).to_string())),
        };

        for key in ["positivePercentage", "negativePercentage", "neutralPercentage"] {
            fields.remove(key);
        }

        Ok(Self {
            positive_percentage: crate::aggregate::round_percentage(aggregate.pos_avg),
            negative_percentage: crate::aggregate::round_percentage(aggregate.neg_avg),
            neutral_percentage: crate::aggregate::round_percentage(aggregate.neu_avg),
            sentiment_summary: fields.remove("sentimentSummary_premium"),
            top_praise: fields.remove("topPraise_premium"),
            top_pain_points: fields.remove("topPainPoints_premium"),
            strategic_opportunity: fields.remove("strategicOpportunity"),
            audience_deep_profile: fields.remove("audienceDeepProfile"),
            content_ideas: fields.remove("contentIdeas"),
            engagement_patterns: fields.remove("engagementPatterns"),
            actionable_insight: fields.remove("actionableInsight_premium"),
            extra: fields,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
