use crate::config::AgencyProfile;
use crate::mockup::CompanyData;
use crate::models::{ChatMessage, ProjectQuoteRequest};
use crate::templates::Template;

/// Number of prior chat turns included in chatbot prompts.
pub const CHAT_HISTORY_WINDOW: usize = 6;

fn or_unspecified(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("Not specified")
}

pub fn build_mockup_prompt(company: &CompanyData, template: &Template) -> String {
    let template_json =
        serde_json::to_string_pretty(template).unwrap_or_else(|_| template.template_id.to_string());
    let features = if company.features.is_empty() {
        "Not specified".to_string()
    } else {
        company.features.join(", ")
    };

    format!(
        r#"You are an expert web designer and UX strategist. Create a detailed website mockup for the company below, following the provided design template.

CRITICAL RULES:
- Use the template's color scheme, typography, spacing and section layout as the design system.
- Write realistic, specific copy for this company. Do NOT use lorem ipsum or placeholder text.
- Include at least 4 content sections. One section name MUST contain "About" and one MUST contain "Services".
- Respond ONLY with valid JSON. No markdown fences, no extra text.

Company Information:
- Company Name: {name}
- Industry: {industry}
- Description: {description}
- Target Audience: {audience}
- Preferred Colors: {colors}
- Website Type: {website_type}
- Requested Features: {features}

Design Template:
{template}

Respond in this exact JSON format:
{{
  "companyInfo": {{
    "name": "{name}",
    "industry": "{industry}",
    "tagline": "A short memorable tagline",
    "description": "2-3 sentence company description",
    "mission": "One sentence mission statement"
  }},
  "header": {{
    "logo": "Logo text",
    "navigation": ["Home", "About", "Services", "Contact"],
    "ctaButton": "Primary call to action"
  }},
  "hero": {{
    "headline": "Compelling headline",
    "subheadline": "Supporting sentence",
    "ctaText": "Button text",
    "secondaryCtaText": "Secondary button text",
    "backgroundStyle": "{hero_style}"
  }},
  "sections": [
    {{
      "name": "About {name}",
      "type": "about",
      "layout": "split",
      "style": "{section_layout}",
      "content": {{ "heading": "...", "body": "...", "highlights": ["...", "..."] }}
    }},
    {{
      "name": "Our Services",
      "type": "services",
      "layout": "grid",
      "style": "cards",
      "services": [{{ "name": "...", "description": "...", "icon": "...", "features": ["..."] }}]
    }},
    {{
      "name": "Why Choose Us",
      "type": "benefits",
      "layout": "grid",
      "style": "icons",
      "benefits": [{{ "title": "...", "description": "..." }}]
    }},
    {{
      "name": "Testimonials",
      "type": "testimonials",
      "layout": "slider",
      "style": "quotes",
      "testimonials": [{{ "quote": "...", "author": "...", "role": "..." }}]
    }},
    {{
      "name": "Contact Us",
      "type": "contact",
      "layout": "split",
      "style": "form",
      "contactInfo": {{ "email": "...", "phone": "...", "address": "..." }},
      "form": {{ "fields": ["name", "email", "message"], "submitText": "..." }}
    }}
  ],
  "designSystem": {{
    "colorPalette": {{ "primary": "...", "secondary": "...", "accent": "...", "background": "...", "surface": "...", "text": "...", "textLight": "...", "border": "...", "highlight": "..." }},
    "typography": {{ "headings": "...", "body": "..." }},
    "spacing": {{ "sectionPadding": "...", "containerPadding": "...", "elementSpacing": "..." }}
  }},
  "features": ["Feature 1", "Feature 2"],
  "technicalRecommendations": ["Recommendation 1", "Recommendation 2"],
  "contentStrategy": {{ "tone": "...", "keyMessages": ["..."], "callToAction": "..." }},
  "additionalPages": ["Page name"],
  "responsiveDesign": {{ "mobile": "...", "tablet": "...", "desktop": "..." }}
}}"#,
        name = company.company_name.trim(),
        industry = company.industry.trim(),
        description = company.description.trim(),
        audience = or_unspecified(company.target_audience.as_deref()),
        colors = or_unspecified(company.preferred_colors.as_deref()),
        website_type = or_unspecified(company.website_type.as_deref()),
        features = features,
        template = template_json,
        hero_style = template.layout.hero_style,
        section_layout = template.layout.section_layout,
    )
}

pub fn build_quote_prompt(request: &ProjectQuoteRequest) -> String {
    let mockup_json = request
        .mockup
        .as_ref()
        .and_then(|m| serde_json::to_string_pretty(m).ok())
        .unwrap_or_else(|| "{}".to_string());
    let features = request
        .features
        .as_ref()
        .map(|f| match f {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| "Not specified".to_string());

    format!(
        r#"You are a senior web project estimator at a digital agency. Produce a realistic project quote for building the website described below.

PRICING GUIDANCE (USD):
- Simple brochure website (up to 5 pages): $3,000 - $8,000
- Business website with CMS and integrations: $8,000 - $15,000
- E-commerce website: $15,000 - $35,000
- Custom web application: $20,000 - $50,000
- Enterprise platform: $25,000 - $100,000+

CRITICAL RULES:
- All costs are plain numbers in USD (no currency symbols or ranges).
- totalCost MUST equal designCost + developmentCost + featuresCost + testingCost.
- Every breakdown phase has a duration and a cost.
- Respond ONLY with valid JSON. No markdown fences, no extra text.

Company Information:
- Company Name: {name}
- Industry: {industry}
- Description: {description}
- Website Type: {website_type}
- Requested Features: {features}
- Budget: {budget}
- Desired Timeline: {timeline}

Website Mockup:
{mockup}

Respond in this exact JSON format:
{{
  "pricing": {{
    "designCost": 0,
    "developmentCost": 0,
    "featuresCost": 0,
    "testingCost": 0,
    "totalCost": 0,
    "currency": "USD"
  }},
  "timeline": {{
    "design": "2 weeks",
    "development": "4 weeks",
    "testing": "1 week",
    "totalDuration": "7 weeks"
  }},
  "breakdown": [
    {{ "phase": "Discovery & Design", "duration": "2 weeks", "cost": 0, "description": "..." }}
  ],
  "included": ["What is included"],
  "optional": [
    {{ "feature": "Optional add-on", "cost": 0, "description": "..." }}
  ],
  "recommendations": ["Recommendation"],
  "nextSteps": ["Next step"]
}}"#,
        name = request.company_name.trim(),
        industry = request.industry.trim(),
        description = request.description.trim(),
        website_type = or_unspecified(request.website_type.as_deref()),
        features = features,
        budget = or_unspecified(request.budget.as_deref()),
        timeline = or_unspecified(request.timeline.as_deref()),
        mockup = mockup_json,
    )
}

pub fn build_chat_prompt(agency: &AgencyProfile, history: &[ChatMessage], message: &str) -> String {
    let start = history.len().saturating_sub(CHAT_HISTORY_WINDOW);
    let transcript = history[start..]
        .iter()
        .map(|m| format!("{}: {}", if m.is_bot { "Assistant" } else { "User" }, m.content))
        .collect::<Vec<_>>()
        .join("\n");
    let transcript = if transcript.is_empty() {
        "(no previous messages)".to_string()
    } else {
        transcript
    };

    format!(
        r#"You are the friendly virtual assistant for {agency}, a digital agency that designs and builds websites and web applications.

Company facts:
- Services: Web Development, UI/UX Design, E-commerce Solutions, Mobile-Responsive Design, SEO Optimization, Website Maintenance & Support
- Pricing: simple websites $3,000 - $8,000; business websites $8,000 - $15,000; e-commerce $15,000 - $35,000; enterprise projects $25,000 - $100,000+
- Typical timelines: 2-4 weeks for simple sites, 6-10 weeks for business and e-commerce sites, 3+ months for enterprise work
- Technologies: React, Next.js, Node.js, TypeScript, headless CMS platforms, cloud hosting
- Business hours: {hours}
- Email: {email}
- Phone: {phone}

Guidelines:
- Answer in 2-5 short sentences or a brief list. Be warm and professional.
- Only quote prices from the ranges above; suggest a free consultation for exact quotes.
- If you do not know something, offer to connect the visitor with the team.

Recent conversation:
{transcript}

User: {message}
Assistant:"#,
        agency = agency.name,
        hours = agency.hours,
        email = agency.email,
        phone = agency.phone,
        transcript = transcript,
        message = message.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TECH;
    use chrono::Utc;

    #[test]
    fn mockup_prompt_embeds_company_and_template() {
        let company = CompanyData {
            company_name: "Stackly".to_string(),
            industry: "SaaS".to_string(),
            description: "Inventory software".to_string(),
            features: vec!["Pricing page".to_string(), "Blog".to_string()],
            ..Default::default()
        };
        let prompt = build_mockup_prompt(&company, &TECH);
        assert!(prompt.contains("Company Name: Stackly"));
        assert!(prompt.contains("Requested Features: Pricing page, Blog"));
        assert!(prompt.contains("Target Audience: Not specified"));
        assert!(prompt.contains("\"templateId\": \"tech\""));
        assert!(prompt.contains(TECH.color_scheme.primary));
    }

    #[test]
    fn quote_prompt_includes_pricing_bands_and_mockup() {
        let request = ProjectQuoteRequest {
            company_name: "Stackly".to_string(),
            mockup: Some(serde_json::json!({"hero": {"headline": "Ship faster"}})),
            ..Default::default()
        };
        let prompt = build_quote_prompt(&request);
        assert!(prompt.contains("$3,000 - $8,000"));
        assert!(prompt.contains("$25,000 - $100,000+"));
        assert!(prompt.contains("Ship faster"));
    }

    #[test]
    fn chat_prompt_keeps_last_six_messages() {
        let now = Utc::now();
        let history: Vec<ChatMessage> = (0..8)
            .map(|i| ChatMessage::user(format!("message-{}", i), now))
            .collect();
        let prompt = build_chat_prompt(&AgencyProfile::default(), &history, "And pricing?");
        assert!(!prompt.contains("message-1\n"));
        assert!(prompt.contains("User: message-2"));
        assert!(prompt.contains("User: message-7"));
        assert!(prompt.contains("User: And pricing?"));
    }
}
