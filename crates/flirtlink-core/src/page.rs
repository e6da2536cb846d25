//! Page state machine.
//!
//! The page is either filling in the persona form or chatting with the
//! agent the form created. `ViewMode::Chat` can only be built from an
//! `AgentHandle`, and nothing ever moves the page back to the form.
//!
//! Everything that happens after a request completes goes through
//! [`PageState::reduce`], a pure function of (state, outcome).

use flirtlink_types::{
    Result,
    config::ServiceConfig,
    persona::{AgentHandle, PersonaDraft, PersonaLinks},
    transcript::{Transcript, TranscriptLine},
    wire::{AgentProfile, ChatResponse, CreateAgentRequest},
};

pub const CREATE_FAILED_NOTICE: &str = "Error creating agent";
pub const CHAT_FAILED_NOTICE: &str = "Chat error";

/// Outcome of an async operation, or a user acknowledgement
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// The creation request finished
    Launched(Result<AgentHandle>),
    /// A reply request finished
    Replied(Result<ChatResponse>),
    /// The stored profile of a freshly created agent arrived
    ProfileLoaded {
        agent: AgentHandle,
        outcome: Result<AgentProfile>,
    },
    /// The user closed the blocking notice
    NoticeDismissed,
}

/// A blocking message the user has to acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Everything needed to issue one reply request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTicket {
    pub agent: AgentHandle,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub agent: AgentHandle,
    pub transcript: Transcript,
    /// Contents of the message input field
    pub input: String,
    /// Advisory only: disables the Send button, blocks nothing else
    pub busy: bool,
    /// Latest persona links echoed back by the service
    pub links: Option<PersonaLinks>,
}

impl ChatView {
    pub fn new(agent: AgentHandle) -> Self {
        Self {
            agent,
            transcript: Transcript::new(),
            input: String::new(),
            busy: false,
            links: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Form,
    Chat(ChatView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub draft: PersonaDraft,
    pub view: ViewMode,
    pub notice: Option<Notice>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            draft: PersonaDraft::default(),
            view: ViewMode::Form,
            notice: None,
        }
    }

    pub fn is_chat(&self) -> bool {
        matches!(self.view, ViewMode::Chat(_))
    }

    pub fn agent(&self) -> Option<&AgentHandle> {
        self.chat().map(|c| &c.agent)
    }

    pub fn chat(&self) -> Option<&ChatView> {
        match &self.view {
            ViewMode::Chat(chat) => Some(chat),
            ViewMode::Form => None,
        }
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatView> {
        match &mut self.view {
            ViewMode::Chat(chat) => Some(chat),
            ViewMode::Form => None,
        }
    }

    /// Chat header, e.g. "Chat with Luna"
    pub fn chat_title(&self) -> String {
        format!("Chat with {}", self.draft.persona_name)
    }

    /// Body for the creation request. Fields go out exactly as typed.
    pub fn launch_request(&self, config: &ServiceConfig) -> CreateAgentRequest {
        CreateAgentRequest::from_draft(config.creator_id.clone(), &self.draft)
    }

    /// Start a Send: show the user's line and mark the chat busy.
    ///
    /// Returns `None` (and changes nothing) when the input is empty or the
    /// page is still on the form. A chat that is already busy still sends.
    pub fn begin_send(&mut self) -> Option<SendTicket> {
        let chat = self.chat_mut()?;
        if chat.input.is_empty() {
            return None;
        }
        let line = chat.input.clone();
        chat.transcript.push(TranscriptLine::user(line.clone()));
        chat.busy = true;
        Some(SendTicket {
            agent: chat.agent.clone(),
            line,
        })
    }

    /// Apply an outcome to the page.
    pub fn reduce(mut self, event: PageEvent) -> Self {
        match event {
            PageEvent::Launched(Ok(agent)) => match self.view {
                ViewMode::Form => {
                    log::info!("Agent {} created, switching to chat", agent);
                    self.view = ViewMode::Chat(ChatView::new(agent));
                }
                ViewMode::Chat(ref chat) => {
                    log::warn!(
                        "Ignoring agent {} from a repeated launch; already chatting with {}",
                        agent,
                        chat.agent
                    );
                }
            },
            PageEvent::Launched(Err(e)) => {
                log::error!("Create agent error: {}", e);
                self.notice = Some(Notice::new(CREATE_FAILED_NOTICE));
            }
            PageEvent::Replied(Ok(resp)) => match self.view {
                ViewMode::Chat(ref mut chat) => {
                    chat.transcript.push(TranscriptLine::agent(resp.reply));
                    chat.input.clear();
                    chat.busy = false;
                    if let Some(links) = resp.links {
                        chat.links = Some(links);
                    }
                }
                ViewMode::Form => log::warn!("Dropping reply received outside of chat"),
            },
            PageEvent::Replied(Err(e)) => {
                log::warn!("Chat error: {}", e);
                if let Some(chat) = self.chat_mut() {
                    chat.busy = false;
                }
                self.notice = Some(Notice::new(CHAT_FAILED_NOTICE));
            }
            PageEvent::ProfileLoaded { agent, outcome } => match outcome {
                Ok(profile) => {
                    if self.agent() != Some(&agent) {
                        log::debug!("Ignoring profile for {}, not the active agent", agent);
                    } else if let Some(chat) = self.chat_mut() {
                        // links from a reply are newer than the stored profile
                        if chat.links.is_none() && !profile.links.is_empty() {
                            chat.links = Some(profile.links);
                        }
                    }
                }
                // Profile lookup is best effort; no notice
                Err(e) => log::warn!("Could not load profile for {}: {}", agent, e),
            },
            PageEvent::NoticeDismissed => {
                self.notice = None;
            }
        }
        self
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
