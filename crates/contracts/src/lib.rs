// Public contracts for the Data Agent management API
// This crate defines DTOs, enums and the response envelope shared by the client and CLI
//
// Note: Field names follow the backend's camelCase JSON convention

pub mod agent_knowledge;
pub mod business_knowledge;
pub mod chat;
pub mod common;
pub mod logical_relation;
pub mod model_config;
pub mod preset_question;

pub use agent_knowledge::*;
pub use business_knowledge::*;
pub use chat::*;
pub use common::*;
pub use logical_relation::*;
pub use model_config::*;
pub use preset_question::*;
