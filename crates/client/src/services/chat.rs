// Chat session service (/api)
//
// Session and message endpoints answer with bare resources; only the session
// management actions (clear, pin, rename, delete) use the envelope.

use crate::client::{segment, HttpClient};
use crate::error::{ClientError, Result};
use dataagent_contracts::{ApiResponse, ChatMessage, ChatSession, CreateSessionRequest};

const API_BASE_URL: &str = "/api";

const SAVE_MESSAGE_FAILED: &str = "保存消息失败";
const PIN_FLAG_REQUIRED: &str = "isPinned参数不能为空";
const OPERATION_FAILED: &str = "操作失败";
const TITLE_REQUIRED: &str = "标题不能为空";
const RENAME_FAILED: &str = "重命名失败";
const DELETE_FAILED: &str = "删除失败";

/// Chat sessions of an agent and their messages
pub struct ChatService<'a> {
    client: &'a HttpClient,
}

impl<'a> ChatService<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    pub async fn get_agent_sessions(&self, agent_id: i64) -> Result<Vec<ChatSession>> {
        self.client
            .get(&format!("{}/agent/{}/sessions", API_BASE_URL, agent_id))
            .await
    }

    pub async fn create_session(
        &self,
        agent_id: i64,
        title: Option<&str>,
        user_id: Option<i64>,
    ) -> Result<ChatSession> {
        let request = CreateSessionRequest {
            title: title.map(str::to_string),
            user_id,
        };
        self.client
            .post(
                &format!("{}/agent/{}/sessions", API_BASE_URL, agent_id),
                &request,
            )
            .await
    }

    /// Remove every session of the agent
    pub async fn clear_agent_sessions(&self, agent_id: i64) -> Result<ApiResponse> {
        self.client
            .delete(&format!("{}/agent/{}/sessions", API_BASE_URL, agent_id))
            .await
    }

    pub async fn get_session_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>> {
        self.client
            .get(&format!(
                "{}/sessions/{}/messages",
                API_BASE_URL,
                segment(session_id)
            ))
            .await
    }

    /// Persist a message; its `session_id` is overwritten with `session_id`
    pub async fn save_message(&self, session_id: &str, message: &ChatMessage) -> Result<ChatMessage> {
        let message = ChatMessage {
            session_id: session_id.to_string(),
            ..message.clone()
        };
        self.client
            .post(
                &format!("{}/sessions/{}/messages", API_BASE_URL, segment(session_id)),
                &message,
            )
            .await
            .map_err(|e| e.translate(500, SAVE_MESSAGE_FAILED))
    }

    pub async fn pin_session(&self, session_id: &str, is_pinned: bool) -> Result<ApiResponse> {
        self.client
            .put_with_query(
                &format!("{}/sessions/{}/pin", API_BASE_URL, segment(session_id)),
                &[("isPinned", is_pinned)],
            )
            .await
            .map_err(|e| {
                e.translate(400, PIN_FLAG_REQUIRED)
                    .translate(500, OPERATION_FAILED)
            })
    }

    /// Rename a session; blank titles are refused before any request is sent
    pub async fn rename_session(&self, session_id: &str, title: &str) -> Result<ApiResponse> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ClientError::InvalidInput(TITLE_REQUIRED.to_string()));
        }

        self.client
            .put_with_query(
                &format!("{}/sessions/{}/rename", API_BASE_URL, segment(session_id)),
                &[("title", title)],
            )
            .await
            .map_err(|e| e.translate(400, TITLE_REQUIRED).translate(500, RENAME_FAILED))
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<ApiResponse> {
        self.client
            .delete(&format!("{}/sessions/{}", API_BASE_URL, segment(session_id)))
            .await
            .map_err(|e| e.translate(500, DELETE_FAILED))
    }
}
