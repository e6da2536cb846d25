//! Request and response bodies exchanged with the agent service.
//!
//! Field names match the service's JSON exactly. Unknown response fields
//! are ignored so the service can grow without breaking the page.

use serde::{Deserialize, Serialize};
use crate::persona::{AgentHandle, PersonaDraft, PersonaLinks};

/// Body of `POST /create-agent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    pub creator_id: String,
    pub persona_name: String,
    pub personality_prompt: String,
    pub links: PersonaLinks,
}

impl CreateAgentRequest {
    /// Copies the draft verbatim. No field is trimmed or validated.
    pub fn from_draft(creator_id: impl Into<String>, draft: &PersonaDraft) -> Self {
        Self {
            creator_id: creator_id.into(),
            persona_name: draft.persona_name.clone(),
            personality_prompt: draft.personality_prompt.clone(),
            links: draft.links.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAgentResponse {
    pub agent_id: AgentHandle,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub agent_id: AgentHandle,
    pub user_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    /// The service echoes the persona's links alongside each reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PersonaLinks>,
}

impl ChatResponse {
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            links: None,
        }
    }
}

/// Body of `GET /agent/{agent_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub persona_name: String,
    pub prompt: String,
    #[serde(default)]
    pub links: PersonaLinks,
}
