//! Prompt templates and the remote prompt hub.

pub mod hub;
pub mod template;

pub use hub::PromptHubClient;
pub use template::PromptTemplate;
