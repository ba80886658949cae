pub mod contact;
pub mod conversation;
pub mod offering;
pub mod portfolio;
pub mod quote;

pub use contact::{ContactStatus, ContactSubmission, NewContact, StatusUpdate};
pub use conversation::{
    generate_conversation_id, ChatMessage, Conversation, ConversationStatus, ConversationSummary,
};
pub use offering::{NewServiceOffering, ServiceOffering, UpdateServiceOffering};
pub use portfolio::{NewPortfolioProject, PortfolioProject, UpdatePortfolioProject};
pub use quote::{ProjectQuoteRequest, Quote};
