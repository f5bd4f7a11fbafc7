use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// Capitalized form used when rendering a transcript into a prompt.
impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Assistant => write!(f, "Assistant"),
        }
    }
}

/// One role-tagged message within a session transcript. Immutable once
/// appended; ordering within a session is append-only chronological.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: &str) -> Self {
        Turn {
            role: Role::User,
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Turn {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }
}

/// Flatten a transcript into a single text prompt, one line per turn. No
/// truncation or token budgeting, so the prompt grows with the session.
pub fn render_prompt(transcript: &[Turn]) -> String {
    let mut prompt = String::new();
    for turn in transcript {
        prompt.push_str(&format!("{}: {}\n", turn.role, turn.content));
    }
    prompt
}
