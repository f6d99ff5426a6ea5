// Data Agent API client
//
// HttpClient owns the transport; each service maps one REST resource onto it.
// Services are cheap borrowed views and hold no state of their own.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;

pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use services::{
    AgentKnowledgeService, BusinessKnowledgeService, ChatService, LogicalRelationService,
    ModelConfigService, PresetQuestionService,
};

// Re-export the DTOs so callers need a single dependency
pub use dataagent_contracts as contracts;
