//! Port trait — the boundary between the page and the agent service.
//!
//! The core only depends on this trait. The HTTP implementation lives in
//! `flirtlink-platform`; tests plug in in-memory fakes.

use async_trait::async_trait;
use flirtlink_types::{
    Result,
    persona::AgentHandle,
    wire::{AgentProfile, ChatRequest, ChatResponse, CreateAgentRequest, CreateAgentResponse},
};

#[async_trait(?Send)]
pub trait AgentServicePort {
    /// Create a persona and get back its agent id
    async fn create_agent(&self, req: CreateAgentRequest) -> Result<CreateAgentResponse>;

    /// Send one user line to an agent and get its reply
    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse>;

    /// Look up what the service stored for an agent
    async fn agent_profile(&self, agent: &AgentHandle) -> Result<AgentProfile>;
}
