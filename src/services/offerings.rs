use chrono::Utc;

use crate::error::{ApiError, ApiResult};
use crate::models::{NewServiceOffering, ServiceOffering, UpdateServiceOffering};
use crate::store::Repository;

#[derive(Debug, Clone, Default)]
pub struct OfferingFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl OfferingFilter {
    fn matches(&self, offering: &ServiceOffering) -> bool {
        let category_ok = self.category.as_deref().map_or(true, |wanted| {
            offering
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(wanted))
        });
        let featured_ok = self.featured.map_or(true, |f| offering.featured == f);
        category_ok && featured_ok
    }
}

#[derive(Clone)]
pub struct OfferingService {
    repo: Repository<ServiceOffering>,
}

impl OfferingService {
    pub fn new(repo: Repository<ServiceOffering>) -> Self {
        Self { repo }
    }

    /// Sorted by display order, then title.
    pub async fn list(&self, filter: &OfferingFilter) -> ApiResult<Vec<ServiceOffering>> {
        let mut offerings: Vec<ServiceOffering> = self
            .repo
            .list()
            .await?
            .into_iter()
            .filter(|o| filter.matches(o))
            .collect();
        offerings.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
        tracing::debug!(count = offerings.len(), "listed services");
        Ok(offerings)
    }

    pub async fn get(&self, id: &str) -> ApiResult<ServiceOffering> {
        self.repo.get(id).await?.ok_or_else(|| {
            tracing::debug!(id, "service not found");
            ApiError::not_found("Service", id)
        })
    }

    pub async fn create(&self, input: NewServiceOffering) -> ApiResult<ServiceOffering> {
        if input.title.trim().is_empty() || input.description.trim().is_empty() {
            return Err(ApiError::validation("Title and description are required"));
        }
        let offering = input.into_offering(Utc::now());
        self.repo.save(&offering).await?;
        tracing::info!(id = %offering.id, title = %offering.title, "created service");
        Ok(offering)
    }

    pub async fn update(&self, id: &str, changes: UpdateServiceOffering) -> ApiResult<ServiceOffering> {
        if changes.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ApiError::validation("Title cannot be empty"));
        }
        let mut offering = self.get(id).await?;
        changes.apply(&mut offering, Utc::now());
        self.repo.save(&offering).await?;
        tracing::info!(id, "updated service");
        Ok(offering)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::not_found("Service", id));
        }
        tracing::info!(id, "deleted service");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn service() -> OfferingService {
        OfferingService::new(Repository::new(Arc::new(MemoryStore::new())))
    }

    fn new_offering(title: &str, order: i32, category: &str) -> NewServiceOffering {
        NewServiceOffering {
            title: title.to_string(),
            description: format!("{} description", title),
            category: Some(category.to_string()),
            order: Some(order),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn lists_in_display_order_with_filters() {
        let svc = service();
        svc.create(new_offering("SEO", 2, "marketing")).await.unwrap();
        svc.create(new_offering("Web Development", 1, "development")).await.unwrap();
        let mut featured = new_offering("Branding", 3, "Marketing");
        featured.featured = Some(true);
        svc.create(featured).await.unwrap();

        let all = svc.list(&OfferingFilter::default()).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Web Development", "SEO", "Branding"]);

        let marketing = svc
            .list(&OfferingFilter { category: Some("marketing".into()), featured: None })
            .await
            .unwrap();
        assert_eq!(marketing.len(), 2);

        let featured_only = svc
            .list(&OfferingFilter { category: None, featured: Some(true) })
            .await
            .unwrap();
        assert_eq!(featured_only.len(), 1);
        assert_eq!(featured_only[0].title, "Branding");
    }

    #[tokio::test]
    async fn create_requires_title_and_description() {
        let err = service().create(NewServiceOffering::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_not_found() {
        let svc = service();
        assert!(matches!(
            svc.update("nope", UpdateServiceOffering::default()).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(svc.delete("nope").await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let svc = service();
        let created = svc.create(new_offering("SEO", 1, "marketing")).await.unwrap();
        let updated = svc
            .update(
                &created.id,
                UpdateServiceOffering {
                    price: Some("From $500".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "SEO");
        assert_eq!(updated.price.as_deref(), Some("From $500"));
        assert!(updated.updated_at >= created.updated_at);
    }
}
