//! Browser platform adapters for FlirtLink.

pub mod http;

pub use http::HttpAgentService;
