use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://flirtlink-app.up.railway.app";
pub const DEFAULT_CREATOR_ID: &str = "demo-user";

/// Where the agent service lives and who is calling it.
///
/// Built once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub api_base: String,
    /// Fixed for the whole session
    pub creator_id: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            creator_id: DEFAULT_CREATOR_ID.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(api_base: impl Into<String>, creator_id: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            creator_id: creator_id.into(),
        }
    }

    /// Overlay optional values (e.g. from build-time env) on the defaults.
    /// Empty strings count as unset.
    pub fn from_overrides(api_base: Option<&str>, creator_id: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.filter(|s| !s.is_empty()) {
            config.api_base = base.to_string();
        }
        if let Some(id) = creator_id.filter(|s| !s.is_empty()) {
            config.creator_id = id.to_string();
        }
        config
    }

    /// Full URL for a service path, with exactly one `/` between base and path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
