pub mod chatbot;
pub mod contact;
pub mod generator;
pub mod offerings;
pub mod portfolio;

pub use chatbot::{ChatReply, ChatResponder, ChatbotService};
pub use contact::ContactService;
pub use generator::MockupGenerator;
pub use offerings::{OfferingFilter, OfferingService};
pub use portfolio::{PortfolioFilter, PortfolioService};
