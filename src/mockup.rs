//! Website mockups.
//!
//! A mockup is either produced deterministically from a template
//! ([`build_fallback_mockup`]) or parsed from a model completion
//! ([`GeneratedMockup`]). Both serialize to the same top-level shape the
//! frontend renders; the fallback never carries the richer optional fields
//! (testimonials, additional pages, responsive design notes) that a model may add.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::templates::{ColorScheme, Layout, Spacing, Template, Typography};

pub const FALLBACK_NOTICE: &str = "This mockup was generated from our industry template library because AI generation is currently unavailable. Contact us for a fully customized design.";

/// Company details submitted through the mockup form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub preferred_colors: Option<String>,
    #[serde(default)]
    pub website_type: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub features: Vec<String>,
}

impl CompanyData {
    /// Returns the first missing required field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("companyName", &self.company_name),
            ("industry", &self.industry),
            ("description", &self.description),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Accepts `"a, b"` as well as `["a", "b"]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(()),
    }

    let items = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => s.split(',').map(str::to_string).collect(),
        OneOrMany::Many(v) => v,
        OneOrMany::Null(()) => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub industry: String,
    pub tagline: String,
    pub description: String,
    pub mission: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub logo: String,
    pub navigation: Vec<String>,
    pub cta_button: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub secondary_cta_text: String,
    pub background_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionContent {
    pub heading: String,
    pub body: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCard {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub layout: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<SectionContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceCard>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    pub color_palette: ColorScheme,
    pub typography: Typography,
    pub spacing: Spacing,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStrategy {
    pub tone: String,
    pub key_messages: Vec<String>,
    pub call_to_action: String,
}

/// Template-driven mockup used whenever the model cannot be consulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackMockup {
    pub company_info: CompanyInfo,
    pub header: Header,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub design_system: DesignSystem,
    pub features: Vec<String>,
    pub technical_recommendations: Vec<String>,
    pub content_strategy: ContentStrategy,
    pub template: Template,
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    pub fallback_notice: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MockupShapeError {
    #[error("mockup is not a JSON object")]
    NotAnObject,
    #[error("mockup is missing object field `{0}`")]
    MissingObject(&'static str),
    #[error("mockup is missing array field `sections`")]
    MissingSections,
    #[error("section {0} has no name")]
    UnnamedSection(usize),
}

/// Model-authored mockup. The body is kept as JSON so optional fields the
/// model adds pass through untouched; only the fields the frontend
/// requires are checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMockup {
    #[serde(flatten)]
    body: Map<String, Value>,
    template: Template,
    #[serde(rename = "isAIGenerated")]
    is_ai_generated: bool,
}

impl GeneratedMockup {
    pub fn from_value(value: Value, template: &Template) -> Result<Self, MockupShapeError> {
        let Value::Object(mut body) = value else {
            return Err(MockupShapeError::NotAnObject);
        };

        for field in ["companyInfo", "hero"] {
            if !body.get(field).is_some_and(Value::is_object) {
                return Err(MockupShapeError::MissingObject(field));
            }
        }

        let sections = body
            .get("sections")
            .and_then(Value::as_array)
            .ok_or(MockupShapeError::MissingSections)?;
        for (i, section) in sections.iter().enumerate() {
            if !section.get("name").is_some_and(Value::is_string) {
                return Err(MockupShapeError::UnnamedSection(i));
            }
        }

        body.remove("template");
        body.remove("isAIGenerated");
        body.remove("fallbackNotice");

        Ok(Self {
            body,
            template: *template,
            is_ai_generated: true,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mockup {
    Generated(GeneratedMockup),
    Fallback(FallbackMockup),
}

impl Mockup {
    pub fn is_ai_generated(&self) -> bool {
        matches!(self, Mockup::Generated(_))
    }

    pub fn template_id(&self) -> &'static str {
        match self {
            Mockup::Generated(m) => m.template.template_id,
            Mockup::Fallback(m) => m.template.template_id,
        }
    }

    pub fn section_names(&self) -> Vec<String> {
        match self {
            Mockup::Generated(m) => m
                .body
                .get("sections")
                .and_then(Value::as_array)
                .map(|sections| {
                    sections
                        .iter()
                        .filter_map(|s| s.get("name").and_then(Value::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            Mockup::Fallback(m) => m.sections.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

const DEFAULT_FEATURES: [&str; 4] = [
    "Responsive Design",
    "Contact Form",
    "SEO Optimization",
    "Fast Loading Pages",
];

const TECHNICAL_RECOMMENDATIONS: [&str; 5] = [
    "Use a modern component framework with server-side rendering for SEO",
    "Serve optimized, lazily-loaded images through a CDN",
    "Meet WCAG 2.1 AA accessibility guidelines",
    "Add analytics and conversion tracking from launch",
    "Deploy behind HTTPS with automated backups",
];

/// Builds a complete mockup from the form data and a template without
/// consulting any external service.
pub fn build_fallback_mockup(company: &CompanyData, template: &Template) -> FallbackMockup {
    let name = company.company_name.trim();
    let industry = company.industry.trim();
    let audience = company
        .target_audience
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or("clients");

    let description = if company.description.trim().is_empty() {
        format!("{} delivers trusted {} services tailored to {}.", name, industry, audience)
    } else {
        company.description.trim().to_string()
    };

    let features = if company.features.is_empty() {
        DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect()
    } else {
        company.features.clone()
    };

    let about = Section {
        name: format!("About {}", name),
        kind: "about".to_string(),
        layout: "split".to_string(),
        style: template.layout.section_layout.to_string(),
        content: Some(SectionContent {
            heading: "Who We Are".to_string(),
            body: description.clone(),
            highlights: vec![
                format!("Experienced {} professionals", industry),
                format!("Focused on the needs of {}", audience),
                "Transparent, reliable service".to_string(),
            ],
        }),
        services: None,
    };

    let services = Section {
        name: "Our Services".to_string(),
        kind: "services".to_string(),
        layout: "grid".to_string(),
        style: "cards".to_string(),
        content: None,
        services: Some(vec![
            ServiceCard {
                name: format!("{} Consulting", industry),
                description: format!(
                    "Expert guidance to help you make the most of your {} investments.",
                    industry
                ),
                icon: "lightbulb".to_string(),
                features: vec![
                    "Needs assessment".to_string(),
                    "Strategic planning".to_string(),
                    "Clear recommendations".to_string(),
                ],
            },
            ServiceCard {
                name: format!("Custom {} Solutions", industry),
                description: format!("Solutions designed around the goals of {}.", audience),
                icon: "settings".to_string(),
                features: vec![
                    "Tailored delivery".to_string(),
                    "Quality assurance".to_string(),
                    "Measurable results".to_string(),
                ],
            },
            ServiceCard {
                name: "Ongoing Support".to_string(),
                description: format!("{} stays with you long after launch.", name),
                icon: "support".to_string(),
                features: vec![
                    "Dedicated contact".to_string(),
                    "Regular check-ins".to_string(),
                    "Fast response times".to_string(),
                ],
            },
        ]),
    };

    FallbackMockup {
        company_info: CompanyInfo {
            name: name.to_string(),
            industry: industry.to_string(),
            tagline: format!("Excellence in {}", industry),
            description,
            mission: format!(
                "To deliver exceptional {} experiences that help {} succeed.",
                industry, audience
            ),
        },
        header: Header {
            logo: name.to_string(),
            navigation: ["Home", "About", "Services", "Contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            cta_button: "Get Started".to_string(),
        },
        hero: Hero {
            headline: format!("Welcome to {}", name),
            subheadline: format!("Your trusted partner in {}", industry),
            cta_text: "Get Started".to_string(),
            secondary_cta_text: "Learn More".to_string(),
            background_style: template.layout.hero_style.to_string(),
        },
        sections: vec![about, services],
        design_system: DesignSystem {
            color_palette: template.color_scheme,
            typography: template.typography,
            spacing: template.spacing,
            layout: template.layout,
        },
        features,
        technical_recommendations: TECHNICAL_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
        content_strategy: ContentStrategy {
            tone: "Professional and approachable".to_string(),
            key_messages: vec![
                format!("{} understands {}", name, industry),
                format!("Built around the needs of {}", audience),
                "Quality you can rely on".to_string(),
            ],
            call_to_action: format!("Contact {} today", name),
        },
        template: *template,
        is_ai_generated: false,
        fallback_notice: FALLBACK_NOTICE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{select_template, RESTAURANT};
    use serde_json::json;

    fn bakery() -> CompanyData {
        CompanyData {
            company_name: "Crumb & Co".to_string(),
            industry: "Food".to_string(),
            description: "Artisan bakery in Portland".to_string(),
            target_audience: Some("local families".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn fallback_has_two_sections_and_template_colors() {
        let template = select_template("Food", None);
        let mockup = build_fallback_mockup(&bakery(), template);

        assert!(!mockup.is_ai_generated);
        assert_eq!(mockup.sections.len(), 2);
        assert_eq!(mockup.sections[0].name, "About Crumb & Co");
        assert_eq!(mockup.sections[1].name, "Our Services");
        assert_eq!(mockup.sections[1].services.as_ref().map(Vec::len), Some(3));
        assert_eq!(mockup.design_system.color_palette, RESTAURANT.color_scheme);
        assert_eq!(mockup.fallback_notice, FALLBACK_NOTICE);
    }

    #[test]
    fn fallback_is_deterministic() {
        let a = build_fallback_mockup(&bakery(), &RESTAURANT);
        let b = build_fallback_mockup(&bakery(), &RESTAURANT);
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_serializes_frontend_field_names() {
        let value = serde_json::to_value(build_fallback_mockup(&bakery(), &RESTAURANT)).unwrap();
        assert_eq!(value["isAIGenerated"], json!(false));
        assert_eq!(
            value["designSystem"]["colorPalette"],
            serde_json::to_value(RESTAURANT.color_scheme).unwrap()
        );
        assert_eq!(value["companyInfo"]["name"], "Crumb & Co");
        assert!(value.get("testimonials").is_none());
    }

    #[test]
    fn default_features_when_none_given() {
        let mockup = build_fallback_mockup(&bakery(), &RESTAURANT);
        assert_eq!(mockup.features.len(), DEFAULT_FEATURES.len());

        let mut company = bakery();
        company.features = vec!["Online ordering".to_string()];
        let mockup = build_fallback_mockup(&company, &RESTAURANT);
        assert_eq!(mockup.features, vec!["Online ordering"]);
    }

    #[test]
    fn features_accept_comma_separated_string() {
        let company: CompanyData = serde_json::from_value(json!({
            "companyName": "Acme",
            "industry": "Retail",
            "description": "Shop",
            "features": "Blog, Newsletter ,"
        }))
        .unwrap();
        assert_eq!(company.features, vec!["Blog", "Newsletter"]);
        assert_eq!(company.missing_field(), None);
    }

    #[test]
    fn missing_field_reports_first_blank() {
        let company = CompanyData {
            company_name: "Acme".to_string(),
            industry: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(company.missing_field(), Some("industry"));
    }

    #[test]
    fn generated_mockup_requires_renderable_shape() {
        let ok = json!({
            "companyInfo": {"name": "Acme"},
            "hero": {"headline": "Hi"},
            "sections": [{"name": "About Acme"}],
            "testimonials": [{"quote": "Great"}],
            "isAIGenerated": false
        });
        let mockup = GeneratedMockup::from_value(ok, &RESTAURANT).unwrap();
        let value = serde_json::to_value(&mockup).unwrap();
        assert_eq!(value["isAIGenerated"], json!(true));
        assert_eq!(value["template"]["templateId"], "restaurant");
        assert!(value.get("testimonials").is_some());

        assert_eq!(
            GeneratedMockup::from_value(json!([1, 2]), &RESTAURANT),
            Err(MockupShapeError::NotAnObject)
        );
        assert_eq!(
            GeneratedMockup::from_value(json!({"companyInfo": {}, "sections": []}), &RESTAURANT),
            Err(MockupShapeError::MissingObject("hero"))
        );
        assert_eq!(
            GeneratedMockup::from_value(
                json!({"companyInfo": {}, "hero": {}, "sections": [{"type": "x"}]}),
                &RESTAURANT
            ),
            Err(MockupShapeError::UnnamedSection(0))
        );
    }

    #[test]
    fn section_names_cover_both_variants() {
        let fallback = Mockup::Fallback(build_fallback_mockup(&bakery(), &RESTAURANT));
        assert!(fallback.section_names().iter().any(|n| n.contains("About")));
        assert!(!fallback.is_ai_generated());

        let generated = Mockup::Generated(
            GeneratedMockup::from_value(
                json!({"companyInfo": {}, "hero": {}, "sections": [{"name": "About Us"}]}),
                &RESTAURANT,
            )
            .unwrap(),
        );
        assert_eq!(generated.section_names(), vec!["About Us"]);
        assert_eq!(generated.template_id(), "restaurant");
    }
}
