use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/project-quote`: the company form plus the mockup the
/// client received from `/api/generate-mockup`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuoteRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website_type: Option<String>,
    #[serde(default)]
    pub features: Option<Value>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub mockup: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub design_cost: f64,
    pub development_cost: f64,
    pub features_cost: f64,
    pub testing_cost: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseEstimate {
    pub phase: String,
    pub duration: String,
    pub cost: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalFeature {
    pub feature: String,
    pub cost: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub pricing: Pricing,
    /// Phase names to durations; the model chooses the breakdown.
    pub timeline: Map<String, Value>,
    pub breakdown: Vec<PhaseEstimate>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub optional: Vec<OptionalFeature>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}
