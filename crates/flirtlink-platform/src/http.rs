//! Agent service client over browser `fetch()` via gloo-net.
//!
//! Every failure (transport, non-2xx status, body that does not match the
//! expected shape) comes back as a `ServiceError`. Error bodies are never
//! read.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use flirtlink_core::ports::AgentServicePort;
use flirtlink_types::{
    Result, ServiceError,
    config::ServiceConfig,
    persona::AgentHandle,
    wire::{AgentProfile, ChatRequest, ChatResponse, CreateAgentRequest, CreateAgentResponse},
};

const CREATE_AGENT_PATH: &str = "/create-agent";
const CHAT_PATH: &str = "/chat";

pub struct HttpAgentService {
    config: ServiceConfig,
}

impl HttpAgentService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ServiceError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        read_json(response).await
    }
}

#[async_trait(?Send)]
impl AgentServicePort for HttpAgentService {
    async fn create_agent(&self, req: CreateAgentRequest) -> Result<CreateAgentResponse> {
        self.post_json(CREATE_AGENT_PATH, &req).await
    }

    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse> {
        self.post_json(CHAT_PATH, &req).await
    }

    async fn agent_profile(&self, agent: &AgentHandle) -> Result<AgentProfile> {
        let url = self.config.endpoint(&profile_path(agent));
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        read_json(response).await
    }
}

fn profile_path(agent: &AgentHandle) -> String {
    format!("/agent/{}", agent)
}

/// Non-2xx statuses are failures, whatever the body says.
fn status_error(status: u16) -> Option<ServiceError> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(ServiceError::Status(status))
    }
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R> {
    if let Some(err) = status_error(response.status()) {
        return Err(err);
    }
    response
        .json::<R>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}
