use serde::{Deserialize, Serialize};

/// Links attached to a persona. Both are optional in practice; an empty
/// string means "not provided" and is still sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaLinks {
    #[serde(default)]
    pub onlyfans: String,
    #[serde(default)]
    pub tip: String,
}

impl PersonaLinks {
    pub fn is_empty(&self) -> bool {
        self.onlyfans.is_empty() && self.tip.is_empty()
    }
}

/// What the user has typed into the persona form so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaDraft {
    pub persona_name: String,
    pub personality_prompt: String,
    pub links: PersonaLinks,
}

/// Identifier the agent service hands back after creating a persona.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentHandle(String);

impl AgentHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
