//! The network operations the page performs.
//!
//! Each one awaits the service and turns the result into a `PageEvent`.
//! Neither touches page state; the reducer applies the outcome later.
//! There is no timeout, retry, or cancellation: a request runs until the
//! service or the transport answers.

use flirtlink_types::persona::AgentHandle;
use flirtlink_types::wire::{ChatRequest, CreateAgentRequest};
use crate::page::{PageEvent, SendTicket};
use crate::ports::AgentServicePort;

/// Issue exactly one creation request with the given body.
pub async fn launch(service: &dyn AgentServicePort, req: CreateAgentRequest) -> PageEvent {
    log::info!("Creating agent '{}' for {}", req.persona_name, req.creator_id);
    let outcome = service.create_agent(req).await.map(|resp| resp.agent_id);
    PageEvent::Launched(outcome)
}

/// Issue exactly one reply request for a line already shown in the transcript.
pub async fn send(service: &dyn AgentServicePort, ticket: SendTicket) -> PageEvent {
    let req = ChatRequest {
        agent_id: ticket.agent,
        user_input: ticket.line,
    };
    PageEvent::Replied(service.chat(req).await)
}

/// Fetch what the service stored for a newly created agent.
pub async fn load_profile(service: &dyn AgentServicePort, agent: AgentHandle) -> PageEvent {
    let outcome = service.agent_profile(&agent).await;
    PageEvent::ProfileLoaded { agent, outcome }
}
