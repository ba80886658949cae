use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "new" => Some(ContactStatus::New),
            "read" => Some(ContactStatus::Read),
            "replied" => Some(ContactStatus::Replied),
            "archived" => Some(ContactStatus::Archived),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for ContactSubmission {
    const COLLECTION: &'static str = "contacts";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /api/contact`. Fields default to empty so that missing
/// values surface as validation errors rather than JSON errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl NewContact {
    pub fn into_submission(self, now: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: non_blank(self.phone),
            company: non_blank(self.company),
            service: non_blank(self.service),
            budget: non_blank(self.budget),
            message: self.message.trim().to_string(),
            status: ContactStatus::New,
            created_at: now,
            updated_at: now,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(ContactStatus::parse(" Replied "), Some(ContactStatus::Replied));
        assert_eq!(ContactStatus::parse("ARCHIVED"), Some(ContactStatus::Archived));
        assert_eq!(ContactStatus::parse("spam"), None);
    }

    #[test]
    fn submission_normalises_input() {
        let now = Utc::now();
        let submission = NewContact {
            name: "  Ada Byron ".into(),
            email: " Ada@Example.COM ".into(),
            phone: Some("   ".into()),
            company: Some(" Analytical Ltd ".into()),
            message: "Need a site".into(),
            ..Default::default()
        }
        .into_submission(now);

        assert_eq!(submission.name, "Ada Byron");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.company.as_deref(), Some("Analytical Ltd"));
        assert_eq!(submission.status, ContactStatus::New);
        assert_eq!(submission.created_at, now);
    }
}
