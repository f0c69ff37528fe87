use serde::{Deserialize, Serialize};

use crate::pricing::{Currency, PricingSelection};

/// Which canned answer the assistant chose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTopic {
    Pricing,
    Features,
    Trial,
    Support,
    Fallback,
}

impl ReplyTopic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pricing => "pricing",
            Self::Features => "features",
            Self::Trial => "trial",
            Self::Support => "support",
            Self::Fallback => "fallback",
        }
    }
}

pub const GREETING: &str =
    "Hi! I'm here to help you with any questions about Move. What would you like to know?";

const FEATURES_REPLY: &str = "Move offers comprehensive features including member management, class scheduling, payment processing, and analytics. Which feature would you like to learn more about?";
const TRIAL_REPLY: &str = "Yes! We offer a 14-day free trial with full access to all features. Would you like me to help you get started?";
const SUPPORT_REPLY: &str = "We provide 24/7 support through chat, email, and phone. Our average response time is under 5 minutes!";
const FALLBACK_REPLY: &str = "I'd be happy to help you with that. Could you please provide more details about what you'd like to know?";

/// Keyword rules, checked in order; the first rule with a matching keyword wins
const RULES: [(ReplyTopic, &[&str]); 4] = [
    (ReplyTopic::Pricing, &["pricing", "cost"]),
    (ReplyTopic::Features, &["features", "what can"]),
    (ReplyTopic::Trial, &["trial", "try"]),
    (ReplyTopic::Support, &["support", "help"]),
];

/// Scripted responder behind the chat widget
#[derive(Debug, Clone)]
pub struct Responder {
    pricing_reply: String,
}

impl Responder {
    /// Build a responder that quotes the core plan price in `currency`
    pub fn new(currency: Currency) -> Self {
        let base = PricingSelection::with_currency(currency).base_price();
        Self {
            pricing_reply: format!(
                "Our pricing starts at {}/year for the core plan. Would you like me to show you our detailed pricing options?",
                base
            ),
        }
    }

    /// Pick the topic for a user message (case-insensitive substring match)
    pub fn classify(&self, input: &str) -> ReplyTopic {
        let lower = input.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(ReplyTopic::Fallback)
    }

    pub fn reply_text(&self, topic: ReplyTopic) -> &str {
        match topic {
            ReplyTopic::Pricing => &self.pricing_reply,
            ReplyTopic::Features => FEATURES_REPLY,
            ReplyTopic::Trial => TRIAL_REPLY,
            ReplyTopic::Support => SUPPORT_REPLY,
            ReplyTopic::Fallback => FALLBACK_REPLY,
        }
    }

    pub fn reply_for(&self, input: &str) -> (ReplyTopic, &str) {
        let topic = self.classify(input);
        (topic, self.reply_text(topic))
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
