use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_text: String,
    pub resume_text: String,
    pub provider: String,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub scores: ScoreBreakdown,
    pub gaps: GapReport,
    pub recommendations: Vec<Recommendation>,
    pub keyword_map: KeywordMap,
    pub rewrites: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Serialize)]
pub struct ScoreBreakdown {
    pub overall: f64,
    pub skills: f64,
    pub keywords: f64,
    pub responsibilities: f64,
    pub seniority: f64,
    pub ats: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct GapReport {
    pub missing_skills: Vec<String>,
    pub weak_areas: Vec<String>,
    pub missing_sections: Vec<String>,
}

// Response shape only; the placeholder analysis never emits recommendations.
#[allow(dead_code)]
#[derive(Debug, Serialize)]
pub enum Priority {
    P0,
    P1,
    P2,
}

#[allow(dead_code)]
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationAction {
    Add,
    Edit,
    Remove,
    Reorder,
}

#[allow(dead_code)]
#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: RecommendationAction,
    pub section: String,
    pub why: String,
    pub how: String,
    pub example_rewrite: Option<String>,
    pub risk_flag: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct KeywordMap {
    pub present_strong: Vec<String>,
    pub present_weak: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub job_text: String,
    pub resume_structured: Map<String, Value>,
    pub target_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub revised_markdown: String,
    pub revised_structured: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recommendation_wire_format() {
        let rec = Recommendation {
            priority: Priority::P1,
            action: RecommendationAction::Reorder,
            section: "experience".to_string(),
            why: "Most relevant role is listed last".to_string(),
            how: "Move it to the top".to_string(),
            example_rewrite: None,
            risk_flag: false,
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["priority"], "P1");
        assert_eq!(value["action"], "reorder");
        assert_eq!(value["example_rewrite"], json!(null));
    }

    #[test]
    fn test_rewrite_request_requires_object() {
        let parsed: Result<RewriteRequest, _> =
            serde_json::from_value(json!({"job_text": "x", "resume_structured": []}));
        assert!(parsed.is_err());
    }
}
