// Resource services
//
// One service per backend REST resource. Each borrows the shared HttpClient.

mod agent_knowledge;
mod business_knowledge;
mod chat;
mod logical_relation;
mod model_config;
mod preset_question;

pub use agent_knowledge::AgentKnowledgeService;
pub use business_knowledge::BusinessKnowledgeService;
pub use chat::ChatService;
pub use logical_relation::LogicalRelationService;
pub use model_config::ModelConfigService;
pub use preset_question::PresetQuestionService;

use crate::client::HttpClient;

impl HttpClient {
    pub fn agent_knowledge(&self) -> AgentKnowledgeService<'_> {
        AgentKnowledgeService::new(self)
    }

    pub fn business_knowledge(&self) -> BusinessKnowledgeService<'_> {
        BusinessKnowledgeService::new(self)
    }

    pub fn chat(&self) -> ChatService<'_> {
        ChatService::new(self)
    }

    pub fn logical_relations(&self) -> LogicalRelationService<'_> {
        LogicalRelationService::new(self)
    }

    pub fn model_configs(&self) -> ModelConfigService<'_> {
        ModelConfigService::new(self)
    }

    pub fn preset_questions(&self) -> PresetQuestionService<'_> {
        PresetQuestionService::new(self)
    }
}
