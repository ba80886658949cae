use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for PortfolioProject {
    const COLLECTION: &'static str = "portfolio_projects";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub client: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    pub featured: Option<bool>,
}

impl NewPortfolioProject {
    pub fn into_project(self, now: DateTime<Utc>) -> PortfolioProject {
        PortfolioProject {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            client: self.client,
            image_url: self.image_url,
            project_url: self.project_url,
            technologies: self.technologies,
            results: self.results,
            featured: self.featured.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolioProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub client: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub featured: Option<bool>,
}

impl UpdatePortfolioProject {
    pub fn apply(self, project: &mut PortfolioProject, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            project.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            project.description = description.trim().to_string();
        }
        if let Some(category) = self.category {
            project.category = category.trim().to_string();
        }
        if self.client.is_some() {
            project.client = self.client;
        }
        if self.image_url.is_some() {
            project.image_url = self.image_url;
        }
        if self.project_url.is_some() {
            project.project_url = self.project_url;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(results) = self.results {
            project.results = results;
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
        project.updated_at = now;
    }
}
