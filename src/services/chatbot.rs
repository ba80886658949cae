//! Website chat assistant.
//!
//! Replies come from the model when it is configured and answering. Otherwise
//! the message is matched against an ordered list of topics and the first
//! topic that matches picks a canned answer.

use chrono::Utc;
use serde::Serialize;

use crate::ai::prompts::build_chat_prompt;
use crate::ai::AiCapability;
use crate::config::AgencyProfile;
use crate::models::{
    generate_conversation_id, ChatMessage, Conversation, ConversationSummary,
};
use crate::store::{Repository, StoreError};

pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Services,
    Pricing,
    Contact,
    Timeline,
    Technology,
    Portfolio,
    Support,
}

const GREETING_WORDS: [&str; 4] = ["hi", "hello", "hey", "greetings"];
const GREETING_PHRASES: [&str; 3] = ["good morning", "good afternoon", "good evening"];

/// Topic rules in priority order. Greetings are handled separately because
/// they match whole words.
const TOPIC_KEYWORDS: [(Topic, &[&str]); 7] = [
    (Topic::Services, &["service", "offer"]),
    (Topic::Pricing, &["price", "pricing", "cost", "quote", "budget"]),
    (Topic::Contact, &["contact", "phone", "email", "reach you"]),
    (Topic::Timeline, &["timeline", "how long", "turnaround"]),
    (Topic::Technology, &["technology", "framework", "tech stack"]),
    (Topic::Portfolio, &["portfolio", "examples", "previous work"]),
    (Topic::Support, &["support", "maintenance"]),
];

pub fn classify(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();

    let is_greeting = lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| GREETING_WORDS.contains(&word))
        || GREETING_PHRASES.iter().any(|p| lower.contains(p));
    if is_greeting {
        return Some(Topic::Greeting);
    }

    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(topic, _)| *topic)
}

pub fn canned_response(agency: &AgencyProfile, topic: Topic) -> String {
    match topic {
        Topic::Greeting => format!(
            "Hello! Welcome to {}. 👋\n\n\
             I'm here to help you learn about our web design and development services. \
             You can ask me about:\n\
             • Our services\n\
             • Pricing and quotes\n\
             • Project timelines\n\
             • Our portfolio\n\n\
             What can I help you with today?",
            agency.name
        ),
        Topic::Services => format!(
            "{} offers a full range of digital services:\n\n\
             • Web Development: custom websites and web applications\n\
             • UI/UX Design: research-driven, conversion-focused interfaces\n\
             • E-commerce Solutions: online stores with secure checkout\n\
             • Mobile-Responsive Design: great on every screen size\n\
             • SEO Optimization: get found by the right customers\n\
             • Maintenance & Support: updates, backups and monitoring\n\n\
             Would you like details on any of these?",
            agency.name
        ),
        Topic::Pricing => "Our pricing depends on scope, but here are typical ranges:\n\n\
             • Simple websites: $3,000 - $8,000\n\
             • Business websites: $8,000 - $15,000\n\
             • E-commerce stores: $15,000 - $35,000\n\
             • Enterprise solutions: $25,000 - $100,000+\n\n\
             For an exact figure, try our AI mockup generator for a personalised quote \
             or book a free consultation."
            .to_string(),
        Topic::Contact => format!(
            "You can reach our team any time:\n\n\
             📧 Email: {}\n\
             📞 Phone: {}\n\
             🕘 Hours: {}\n\n\
             Or fill out the contact form and we'll get back to you within one business day.",
            agency.email, agency.phone, agency.hours
        ),
        Topic::Timeline => "Typical project timelines:\n\n\
             • Simple websites: 2-4 weeks\n\
             • Business websites: 4-8 weeks\n\
             • E-commerce stores: 6-10 weeks\n\
             • Custom and enterprise projects: 3+ months\n\n\
             We'll give you a detailed schedule once we understand your requirements."
            .to_string(),
        Topic::Technology => "We build with modern, proven technology:\n\n\
             • Frontend: React, Next.js, TypeScript\n\
             • Backend: Node.js, Rust, REST and GraphQL APIs\n\
             • Content: headless CMS platforms\n\
             • Hosting: cloud platforms with CDN, HTTPS and automated backups\n\n\
             We pick the stack that best fits your goals and budget."
            .to_string(),
        Topic::Portfolio => "We'd love to show you our work! Visit the Portfolio page to browse \
             recent projects across restaurants, retail, healthcare, technology and professional \
             services. Each case study covers the challenge, our approach and the results.\n\n\
             Is there a particular industry you're interested in?"
            .to_string(),
        Topic::Support => "Every project includes 30 days of free support after launch. After that \
             we offer maintenance plans covering:\n\n\
             • Security and software updates\n\
             • Daily backups and uptime monitoring\n\
             • Content changes and small improvements\n\
             • Priority help when you need it\n\n\
             Ask us about the plan that fits your site."
            .to_string(),
    }
}

/// Reply used when no topic matches. Returning visitors get a shorter prompt.
pub fn default_response(agency: &AgencyProfile, has_history: bool) -> String {
    if has_history {
        "I want to make sure I give you the right answer. Could you tell me a bit more? \
         I can help with services, pricing, timelines, technology, our portfolio or support."
            .to_string()
    } else {
        format!(
            "Thanks for reaching out to {}! I can answer questions about our services, pricing, \
             project timelines and portfolio. For anything else, email us at {} and a team \
             member will help you personally.",
            agency.name, agency.email
        )
    }
}

pub fn fallback_reply(agency: &AgencyProfile, message: &str, history: &[ChatMessage]) -> String {
    match classify(message) {
        Some(topic) => canned_response(agency, topic),
        None => default_response(agency, !history.is_empty()),
    }
}

#[derive(Debug, Clone)]
pub struct ChatResponder {
    ai: AiCapability,
    agency: AgencyProfile,
}

impl ChatResponder {
    pub fn new(ai: AiCapability, agency: AgencyProfile) -> Self {
        Self { ai, agency }
    }

    /// `history` holds the turns before `message`.
    pub async fn respond(&self, message: &str, history: &[ChatMessage]) -> String {
        let AiCapability::Available(model) = &self.ai else {
            return fallback_reply(&self.agency, message, history);
        };

        let prompt = build_chat_prompt(&self.agency, history, message);
        match model.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "chat completion failed; using canned reply");
                fallback_reply(&self.agency, message, history)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub conversation_id: String,
    pub timestamp: chrono::DateTime<Utc>,
}

#[derive(Clone)]
pub struct ChatbotService {
    responder: ChatResponder,
    conversations: Repository<Conversation>,
}

impl ChatbotService {
    pub fn new(responder: ChatResponder, conversations: Repository<Conversation>) -> Self {
        Self {
            responder,
            conversations,
        }
    }

    pub async fn handle_message(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, StoreError> {
        let now = Utc::now();
        let conversation_id = conversation_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| generate_conversation_id(now));

        let user_message = ChatMessage::user(message.trim(), now);
        let history = match self.conversations.get(&conversation_id).await? {
            Some(existing) => {
                self.append_message(&conversation_id, &user_message).await?;
                existing.messages().to_vec()
            }
            None => {
                let mut conversation = Conversation::new(&conversation_id, ANONYMOUS_USER, now);
                conversation.push_message(user_message.clone());
                conversation.prepare_save(now);
                if self.conversations.insert(&conversation).await? {
                    tracing::info!(conversation_id = %conversation_id, "starting conversation");
                } else {
                    // Another request created it first.
                    self.append_message(&conversation_id, &user_message).await?;
                }
                Vec::new()
            }
        };

        let response = self.responder.respond(message, &history).await;

        let replied_at = Utc::now();
        self.append_message(&conversation_id, &ChatMessage::bot(&response, replied_at))
            .await?;

        Ok(ChatReply {
            response,
            conversation_id,
            timestamp: replied_at,
        })
    }

    pub async fn history(&self, conversation_id: &str) -> Result<Option<Conversation>, StoreError> {
        self.conversations.get(conversation_id).await
    }

    /// Most recently active first. Every message is a write, so the store's
    /// write order is activity order.
    pub async fn recent_conversations(&self, limit: usize) -> Result<Vec<ConversationSummary>, StoreError> {
        let conversations = self.conversations.recent(limit).await?;
        Ok(conversations.iter().map(Conversation::summary).collect())
    }

    /// Appends in place so concurrent turns on one conversation are all kept.
    async fn append_message(&self, conversation_id: &str, message: &ChatMessage) -> Result<(), StoreError> {
        let set = Conversation::activity_update(message.timestamp)?;
        let appended = self
            .conversations
            .append(
                conversation_id,
                Conversation::MESSAGES_FIELD,
                std::slice::from_ref(message),
                set,
            )
            .await?;
        if !appended {
            tracing::warn!(conversation_id, "conversation vanished before message was stored");
        }
        Ok(())
    }
}
