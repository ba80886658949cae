use chrono::Utc;

use crate::error::{ApiError, ApiResult};
use crate::models::{NewPortfolioProject, PortfolioProject, UpdatePortfolioProject};
use crate::store::Repository;

#[derive(Debug, Clone, Default)]
pub struct PortfolioFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Clone)]
pub struct PortfolioService {
    repo: Repository<PortfolioProject>,
}

impl PortfolioService {
    pub fn new(repo: Repository<PortfolioProject>) -> Self {
        Self { repo }
    }

    /// Newest first.
    pub async fn list(&self, filter: &PortfolioFilter) -> ApiResult<Vec<PortfolioProject>> {
        let mut projects: Vec<PortfolioProject> = self
            .repo
            .list()
            .await?
            .into_iter()
            .filter(|p| {
                filter
                    .category
                    .as_deref()
                    .map_or(true, |c| p.category.eq_ignore_ascii_case(c))
                    && filter.featured.map_or(true, |f| p.featured == f)
            })
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tracing::debug!(count = projects.len(), "listed portfolio projects");
        Ok(projects)
    }

    pub async fn get(&self, id: &str) -> ApiResult<PortfolioProject> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Portfolio project", id))
    }

    pub async fn create(&self, input: NewPortfolioProject) -> ApiResult<PortfolioProject> {
        let missing = [
            ("title", input.title.trim().is_empty()),
            ("description", input.description.trim().is_empty()),
            ("category", input.category.trim().is_empty()),
        ]
        .into_iter()
        .filter(|(_, blank)| *blank)
        .map(|(name, _)| name)
        .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ApiError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let project = input.into_project(Utc::now());
        self.repo.save(&project).await?;
        tracing::info!(id = %project.id, title = %project.title, "created portfolio project");
        Ok(project)
    }

    pub async fn update(&self, id: &str, changes: UpdatePortfolioProject) -> ApiResult<PortfolioProject> {
        let mut project = self.get(id).await?;
        changes.apply(&mut project, Utc::now());
        if project.title.is_empty() || project.category.is_empty() {
            return Err(ApiError::validation("Title and category cannot be empty"));
        }
        self.repo.save(&project).await?;
        tracing::info!(id, "updated portfolio project");
        Ok(project)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::not_found("Portfolio project", id));
        }
        tracing::info!(id, "deleted portfolio project");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn service() -> PortfolioService {
        PortfolioService::new(Repository::new(Arc::new(MemoryStore::new())))
    }

    #[tokio::test]
    async fn missing_fields_are_listed() {
        let err = service()
            .create(NewPortfolioProject {
                title: "Bistro".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: description, category");
    }

    #[tokio::test]
    async fn filters_by_category_case_insensitively() {
        let svc = service();
        for (title, category) in [("Bistro", "Restaurant"), ("Shopfront", "E-commerce")] {
            svc.create(NewPortfolioProject {
                title: title.into(),
                description: "A project".into(),
                category: category.into(),
                ..Default::default()
            })
            .await
            .unwrap();
        }
        let filter = PortfolioFilter {
            category: Some("restaurant".into()),
            featured: None,
        };
        let projects = svc.list(&filter).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Bistro");
    }

    #[tokio::test]
    async fn blanking_title_is_rejected() {
        let svc = service();
        let project = svc
            .create(NewPortfolioProject {
                title: "Bistro".into(),
                description: "A project".into(),
                category: "Restaurant".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let err = svc
            .update(
                &project.id,
                UpdatePortfolioProject {
                    title: Some("   ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(svc.get(&project.id).await.unwrap().title, "Bistro");
    }
}
