use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::ai::AiCapability;
use crate::config::{AgencyProfile, Environment};
use crate::db::DatabaseState;
use crate::error::{ApiError, ApiResult};
use crate::services::{
    ChatResponder, ChatbotService, ContactService, MockupGenerator, OfferingService,
    PortfolioService,
};
use crate::store::{DocumentStore, Repository};

/// Services that need the document store.
#[derive(Clone)]
pub struct Backend {
    pub offerings: OfferingService,
    pub portfolio: PortfolioService,
    pub contacts: ContactService,
    pub chatbot: ChatbotService,
}

impl Backend {
    fn new(store: Arc<dyn DocumentStore>, responder: ChatResponder) -> Self {
        Self {
            offerings: OfferingService::new(Repository::new(store.clone())),
            portfolio: PortfolioService::new(Repository::new(store.clone())),
            contacts: ContactService::new(Repository::new(store.clone())),
            chatbot: ChatbotService::new(responder, Repository::new(store)),
        }
    }
}

/// Built once at startup and shared by every worker through `web::Data`.
pub struct AppState {
    pub generator: MockupGenerator,
    pub database: DatabaseState,
    pub environment: Environment,
    pub started_at: DateTime<Utc>,
    backend: Option<Backend>,
}

impl AppState {
    pub fn new(
        ai: AiCapability,
        database: DatabaseState,
        agency: AgencyProfile,
        environment: Environment,
    ) -> Self {
        let backend = database.store().map(|store| {
            Backend::new(store.clone(), ChatResponder::new(ai.clone(), agency.clone()))
        });

        Self {
            generator: MockupGenerator::new(ai),
            database,
            environment,
            started_at: Utc::now(),
            backend,
        }
    }

    pub fn ai(&self) -> &AiCapability {
        self.generator.ai()
    }

    pub fn backend(&self) -> ApiResult<&Backend> {
        self.backend.as_ref().ok_or_else(|| match &self.database {
            DatabaseState::Unavailable { reason } => ApiError::ServiceUnavailable(reason.clone()),
            DatabaseState::Connected(_) => ApiError::ServiceUnavailable("database not ready".into()),
        })
    }
}
