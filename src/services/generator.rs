//! Mockup and quote generation.
//!
//! Mockups favour availability: every failure on the model path degrades to
//! the template fallback. Quotes favour correctness: without a usable model
//! answer there is no quote, and the error reaches the caller.

use crate::ai::prompts::{build_mockup_prompt, build_quote_prompt};
use crate::ai::{extract_json, AiCapability, AiError};
use crate::mockup::{build_fallback_mockup, CompanyData, GeneratedMockup, Mockup};
use crate::models::{ProjectQuoteRequest, Quote};
use crate::templates::{select_template, Template};

#[derive(Debug, Clone)]
pub struct MockupGenerator {
    ai: AiCapability,
}

impl MockupGenerator {
    pub fn new(ai: AiCapability) -> Self {
        Self { ai }
    }

    pub fn ai(&self) -> &AiCapability {
        &self.ai
    }

    /// Never fails; see the module docs.
    pub async fn generate_website_mockup(&self, company: &CompanyData) -> Mockup {
        let template = select_template(&company.industry, company.website_type.as_deref());

        let model = match &self.ai {
            AiCapability::Available(model) => model,
            AiCapability::Unavailable { reason } => {
                tracing::info!(
                    company = %company.company_name,
                    template = template.template_id,
                    %reason,
                    "AI unavailable; using template fallback mockup"
                );
                return fallback(company, template);
            }
        };

        let prompt = build_mockup_prompt(company, template);
        let completion = match model.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "mockup generation failed; using fallback");
                return fallback(company, template);
            }
        };

        match parse_generated_mockup(&completion, template) {
            Ok(mockup) => {
                tracing::info!(
                    company = %company.company_name,
                    template = template.template_id,
                    "generated AI mockup"
                );
                Mockup::Generated(mockup)
            }
            Err(e) => {
                tracing::warn!(error = %e, "unusable mockup completion; using fallback");
                fallback(company, template)
            }
        }
    }

    pub async fn generate_project_quote(&self, request: &ProjectQuoteRequest) -> Result<Quote, AiError> {
        let model = match &self.ai {
            AiCapability::Available(model) => model,
            AiCapability::Unavailable { reason } => {
                return Err(AiError::Unavailable(reason.clone()));
            }
        };

        let prompt = build_quote_prompt(request);
        let completion = model.generate(&prompt).await?;
        let quote = parse_quote(&completion)?;

        tracing::info!(
            company = %request.company_name,
            total_cost = quote.pricing.total_cost,
            "generated project quote"
        );
        Ok(quote)
    }
}

fn fallback(company: &CompanyData, template: &Template) -> Mockup {
    Mockup::Fallback(build_fallback_mockup(company, template))
}

pub fn parse_generated_mockup(completion: &str, template: &Template) -> Result<GeneratedMockup, AiError> {
    let value = extract_json(completion)?;
    GeneratedMockup::from_value(value, template).map_err(|e| AiError::Shape(e.to_string()))
}

pub fn parse_quote(completion: &str) -> Result<Quote, AiError> {
    let value = extract_json(completion)?;
    serde_json::from_value(value).map_err(|e| AiError::Shape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockGenerativeModel;
    use crate::templates::PROFESSIONAL;

    fn company() -> CompanyData {
        CompanyData {
            company_name: "Ledger Lane".to_string(),
            industry: "Accounting".to_string(),
            description: "Bookkeeping for small businesses".to_string(),
            ..Default::default()
        }
    }

    fn with_completion(result: Result<String, AiError>) -> MockupGenerator {
        let mut model = MockGenerativeModel::new();
        model.expect_model_name().return_const("mock".to_string());
        let mut result = Some(result);
        model
            .expect_generate()
            .times(1)
            .returning(move |_| result.take().unwrap_or(Err(AiError::EmptyResponse)));
        MockupGenerator::new(AiCapability::available(model))
    }

    #[tokio::test]
    async fn unavailable_ai_equals_direct_fallback() {
        let generator = MockupGenerator::new(AiCapability::unavailable("no key"));
        let mockup = generator.generate_website_mockup(&company()).await;
        let expected = build_fallback_mockup(&company(), select_template("Accounting", None));
        assert_eq!(mockup, Mockup::Fallback(expected));
    }

    #[tokio::test]
    async fn completion_without_json_falls_back() {
        let generator = with_completion(Ok("Sorry, I can't do that right now.".to_string()));
        let mockup = generator.generate_website_mockup(&company()).await;
        assert!(!mockup.is_ai_generated());
        assert_eq!(mockup.section_names().len(), 2);
    }

    #[tokio::test]
    async fn transport_error_falls_back() {
        let generator = with_completion(Err(AiError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }));
        let mockup = generator.generate_website_mockup(&company()).await;
        assert!(!mockup.is_ai_generated());
    }

    #[tokio::test]
    async fn valid_completion_is_tagged_with_template() {
        let completion = r#"Here you go:
{"companyInfo": {"name": "Ledger Lane"}, "hero": {"headline": "Books, balanced"},
 "sections": [{"name": "About Ledger Lane"}, {"name": "Our Services"}, {"name": "Testimonials", "testimonials": []}]}"#;
        let generator = with_completion(Ok(completion.to_string()));
        let mockup = generator.generate_website_mockup(&company()).await;

        assert!(mockup.is_ai_generated());
        assert_eq!(mockup.template_id(), PROFESSIONAL.template_id);
        let value = serde_json::to_value(&mockup).unwrap();
        assert_eq!(value["isAIGenerated"], true);
        assert_eq!(value["sections"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn quote_without_ai_is_an_error() {
        let generator = MockupGenerator::new(AiCapability::unavailable("no key"));
        let result = generator
            .generate_project_quote(&ProjectQuoteRequest::default())
            .await;
        assert!(matches!(result, Err(AiError::Unavailable(_))));
    }

    #[tokio::test]
    async fn quote_call_failure_propagates() {
        let generator = with_completion(Err(AiError::EmptyResponse));
        let result = generator
            .generate_project_quote(&ProjectQuoteRequest::default())
            .await;
        assert!(matches!(result, Err(AiError::EmptyResponse)));
    }

    #[tokio::test]
    async fn unparseable_quote_is_an_error() {
        let generator = with_completion(Ok("{\"pricing\": \"call us\"}".to_string()));
        let result = generator
            .generate_project_quote(&ProjectQuoteRequest::default())
            .await;
        assert!(matches!(result, Err(AiError::Shape(_))));
    }

    #[tokio::test]
    async fn quote_parses_from_completion() {
        let completion = r#"```json
{"pricing": {"designCost": 1000, "developmentCost": 3000, "featuresCost": 500, "testingCost": 500, "totalCost": 5000},
 "timeline": {"totalDuration": "4 weeks"},
 "breakdown": [{"phase": "Build", "duration": "3 weeks", "cost": 3000, "description": "Development"}]}
```"#;
        let generator = with_completion(Ok(completion.to_string()));
        let quote = generator
            .generate_project_quote(&ProjectQuoteRequest::default())
            .await
            .unwrap();
        assert_eq!(quote.pricing.total_cost, 5000.0);
        assert_eq!(quote.breakdown.len(), 1);
    }
}
