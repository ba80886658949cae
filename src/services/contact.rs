use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ApiError, ApiResult};
use crate::models::{ContactStatus, ContactSubmission, NewContact};
use crate::store::Repository;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MAX_MESSAGE_CHARS: usize = 5000;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// Checks a submission before anything touches the store.
pub fn validate_contact(input: &NewContact) -> ApiResult<()> {
    if input.name.trim().is_empty() || input.email.trim().is_empty() || input.message.trim().is_empty() {
        return Err(ApiError::validation("Name, email, and message are required"));
    }
    if !is_valid_email(&input.email) {
        return Err(ApiError::validation("Please provide a valid email address"));
    }
    if input.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::validation(format!(
            "Message must be at most {} characters",
            MAX_MESSAGE_CHARS
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ContactService {
    repo: Repository<ContactSubmission>,
}

impl ContactService {
    pub fn new(repo: Repository<ContactSubmission>) -> Self {
        Self { repo }
    }

    pub async fn submit(&self, input: NewContact) -> ApiResult<ContactSubmission> {
        validate_contact(&input)?;
        let submission = input.into_submission(Utc::now());
        self.repo.save(&submission).await?;
        tracing::info!(id = %submission.id, email = %submission.email, "contact form submitted");
        Ok(submission)
    }

    /// Newest first.
    pub async fn list(&self) -> ApiResult<Vec<ContactSubmission>> {
        let mut contacts = self.repo.list().await?;
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contacts)
    }

    pub async fn get(&self, id: &str) -> ApiResult<ContactSubmission> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Contact", id))
    }

    pub async fn update_status(&self, id: &str, status: &str) -> ApiResult<ContactSubmission> {
        let status = ContactStatus::parse(status).ok_or_else(|| {
            ApiError::validation("Status must be one of: new, read, replied, archived")
        })?;
        let mut contact = self.get(id).await?;
        contact.status = status;
        contact.updated_at = Utc::now();
        self.repo.save(&contact).await?;
        tracing::info!(id, ?status, "contact status updated");
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn valid() -> NewContact {
        NewContact {
            name: "Ada".into(),
            email: "Ada@Example.com".into(),
            message: "I need a website".into(),
            ..Default::default()
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" someone@mail.example.org "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn required_fields() {
        let mut input = valid();
        input.message = " ".into();
        assert!(matches!(validate_contact(&input), Err(ApiError::Validation(_))));
        assert!(validate_contact(&valid()).is_ok());
    }

    #[tokio::test]
    async fn submit_normalises_and_status_updates() {
        let svc = ContactService::new(Repository::new(Arc::new(MemoryStore::new())));
        let contact = svc.submit(valid()).await.unwrap();
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.status, ContactStatus::New);

        let updated = svc.update_status(&contact.id, "Replied").await.unwrap();
        assert_eq!(updated.status, ContactStatus::Replied);

        assert!(matches!(
            svc.update_status(&contact.id, "spam").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            svc.update_status("missing", "read").await,
            Err(ApiError::NotFound(_))
        ));
    }
}
