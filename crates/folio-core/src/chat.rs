//! Scripted chat responder: ordered keyword rules, first match wins.

pub const FALLBACK_REPLY: &str =
    "I'm not sure how to respond to that. Try asking about my skills, projects, or experience.";

pub struct ChatRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

pub const CHAT_RULES: &[ChatRule] = &[
    ChatRule {
        keywords: &["hello", "hi"],
        reply: "Hello! How can I help you explore this portfolio?",
    },
    ChatRule {
        keywords: &["skill"],
        reply: "I have expertise in JavaScript, React, Three.js, and UI/UX design. Check out the Skills section for details!",
    },
    ChatRule {
        keywords: &["project"],
        reply: "I've worked on various projects including interactive dashboards, UI libraries, and e-commerce experiences. See the Projects section!",
    },
    ChatRule {
        keywords: &["experience", "year"],
        reply: "I have over 5 years of experience in web development, specializing in creating immersive digital experiences.",
    },
    ChatRule {
        keywords: &["contact"],
        reply: "You can reach me through the contact form or via the social links in the Contact section.",
    },
    ChatRule {
        keywords: &["universe"],
        reply: "Try pressing the 'U' key to activate Universe Mode!",
    },
];

#[inline]
pub fn reply_for(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    CHAT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK_REPLY)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Record a user message. Returns the trimmed text, or `None` when blank.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });
        Some(text.to_string())
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
