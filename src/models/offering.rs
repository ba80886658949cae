use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Document;

/// A service the agency sells, listed under `/api/services`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for ServiceOffering {
    const COLLECTION: &'static str = "services";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceOffering {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl NewServiceOffering {
    pub fn into_offering(self, now: DateTime<Utc>) -> ServiceOffering {
        ServiceOffering {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            icon: self.icon,
            features: self.features,
            price: self.price,
            category: self.category,
            featured: self.featured.unwrap_or(false),
            order: self.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceOffering {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl UpdateServiceOffering {
    pub fn apply(self, offering: &mut ServiceOffering, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            offering.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            offering.description = description.trim().to_string();
        }
        if self.icon.is_some() {
            offering.icon = self.icon;
        }
        if let Some(features) = self.features {
            offering.features = features;
        }
        if self.price.is_some() {
            offering.price = self.price;
        }
        if self.category.is_some() {
            offering.category = self.category;
        }
        if let Some(featured) = self.featured {
            offering.featured = featured;
        }
        if let Some(order) = self.order {
            offering.order = order;
        }
        offering.updated_at = now;
    }
}
