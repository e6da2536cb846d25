#[cfg(test)]
mod tests {
    use crate::persona::*;
    use crate::transcript::*;
    use crate::wire::*;
    use crate::config::*;
    use crate::error::*;
    use serde_json::json;

    // ─── Persona Tests ───────────────────────────────────────

    #[test]
    fn test_draft_default_is_empty() {
        let draft = PersonaDraft::default();
        assert!(draft.persona_name.is_empty());
        assert!(draft.personality_prompt.is_empty());
        assert!(draft.links.is_empty());
    }

    #[test]
    fn test_links_is_empty_with_one_link() {
        let links = PersonaLinks {
            onlyfans: String::new(),
            tip: "https://tips.example/luna".to_string(),
        };
        assert!(!links.is_empty());
    }

    #[test]
    fn test_agent_handle_display() {
        let handle = AgentHandle::new("a1");
        assert_eq!(handle.as_str(), "a1");
        assert_eq!(handle.to_string(), "a1");
    }

    // ─── Transcript Tests ────────────────────────────────────

    #[test]
    fn test_transcript_line_rendering() {
        assert_eq!(TranscriptLine::user("hi").to_string(), "You: hi");
        assert_eq!(TranscriptLine::agent("hey there").to_string(), "Agent: hey there");
    }

    #[test]
    fn test_transcript_preserves_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(TranscriptLine::user("one"));
        transcript.push(TranscriptLine::agent("two"));
        transcript.push(TranscriptLine::user("three"));

        assert_eq!(transcript.lines().len(), 3);
        assert_eq!(transcript.rendered(), vec!["You: one", "Agent: two", "You: three"]);
        assert_eq!(transcript.lines()[1].speaker, Speaker::Agent);
    }

    #[test]
    fn test_speaker_labels() {
        assert_eq!(Speaker::User.label(), "You");
        assert_eq!(Speaker::Agent.label(), "Agent");
    }

    // ─── Wire Tests ──────────────────────────────────────────

    #[test]
    fn test_create_request_body_shape() {
        let draft = PersonaDraft {
            persona_name: "Luna".to_string(),
            personality_prompt: "flirty".to_string(),
            links: PersonaLinks {
                onlyfans: "x".to_string(),
                tip: "y".to_string(),
            },
        };
        let req = CreateAgentRequest::from_draft("demo-user", &draft);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "creator_id": "demo-user",
                "persona_name": "Luna",
                "personality_prompt": "flirty",
                "links": { "onlyfans": "x", "tip": "y" }
            })
        );
    }

    #[test]
    fn test_create_request_keeps_empty_fields() {
        let req = CreateAgentRequest::from_draft("demo-user", &PersonaDraft::default());
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["persona_name"], "");
        assert_eq!(value["personality_prompt"], "");
        assert_eq!(value["links"], json!({ "onlyfans": "", "tip": "" }));
    }

    #[test]
    fn test_create_request_does_not_trim() {
        let draft = PersonaDraft {
            persona_name: "  Luna ".to_string(),
            ..Default::default()
        };
        let req = CreateAgentRequest::from_draft("demo-user", &draft);
        assert_eq!(req.persona_name, "  Luna ");
    }

    #[test]
    fn test_create_response_parses_agent_id() {
        let resp: CreateAgentResponse = serde_json::from_str(r#"{"agent_id":"a1"}"#).unwrap();
        assert_eq!(resp.agent_id, AgentHandle::new("a1"));
    }

    #[test]
    fn test_create_response_missing_agent_id_is_error() {
        let result = serde_json::from_str::<CreateAgentResponse>(r#"{"id":"a1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_request_body_shape() {
        let req = ChatRequest {
            agent_id: AgentHandle::new("a1"),
            user_input: "hi".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({ "agent_id": "a1", "user_input": "hi" }));
    }

    #[test]
    fn test_chat_response_without_links() {
        let resp: ChatResponse = serde_json::from_str(r#"{"reply":"hey there"}"#).unwrap();
        assert_eq!(resp, ChatResponse::text("hey there"));
    }

    #[test]
    fn test_chat_response_with_links_and_extra_fields() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"reply":"hey","links":{"onlyfans":"x","tip":"y"},"mood":"teasing"}"#,
        )
        .unwrap();
        assert_eq!(resp.reply, "hey");
        let links = resp.links.unwrap();
        assert_eq!(links.onlyfans, "x");
        assert_eq!(links.tip, "y");
    }

    #[test]
    fn test_chat_response_partial_links() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"reply":"hey","links":{"tip":"y"}}"#).unwrap();
        let links = resp.links.unwrap();
        assert!(links.onlyfans.is_empty());
        assert_eq!(links.tip, "y");
    }

    #[test]
    fn test_agent_profile_parses() {
        let profile: AgentProfile = serde_json::from_str(
            r#"{"persona_name":"Luna","prompt":"flirty","links":{"onlyfans":"x","tip":"y"}}"#,
        )
        .unwrap();
        assert_eq!(profile.persona_name, "Luna");
        assert_eq!(profile.prompt, "flirty");
        assert_eq!(profile.links.tip, "y");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.creator_id, "demo-user");
    }

    #[test]
    fn test_config_endpoint_joins_once() {
        let config = ServiceConfig::new("http://localhost:8000", "demo-user");
        assert_eq!(config.endpoint("/chat"), "http://localhost:8000/chat");
        assert_eq!(config.endpoint("create-agent"), "http://localhost:8000/create-agent");

        let trailing = ServiceConfig::new("http://localhost:8000/", "demo-user");
        assert_eq!(trailing.endpoint("/chat"), "http://localhost:8000/chat");
    }

    #[test]
    fn test_config_overrides() {
        let config = ServiceConfig::from_overrides(Some("http://api.test"), None);
        assert_eq!(config.api_base, "http://api.test");
        assert_eq!(config.creator_id, DEFAULT_CREATOR_ID);

        let config = ServiceConfig::from_overrides(Some(""), Some("creator-7"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.creator_id, "creator-7");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(ServiceError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            ServiceError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
