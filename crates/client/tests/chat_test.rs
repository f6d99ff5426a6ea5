// Integration tests for ChatService against a mock backend

mod common;

use dataagent_client::contracts::{ChatMessage, MessageRole, MessageType, SessionStatus};
use dataagent_client::ClientError;
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_sessions_are_unwrapped_resources() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/agent/1/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "a1", "agentId": 1, "title": "销售分析", "status": "active", "isPinned": true },
            { "id": "b2", "agentId": 1, "title": "old", "status": "archived", "isPinned": false }
        ])))
        .mount(&server)
        .await;

    let sessions = client.chat().get_agent_sessions(1).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert!(sessions[0].is_pinned);
    assert_eq!(sessions[1].status, SessionStatus::Archived);
}

#[tokio::test]
async fn test_create_session() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/api/agent/1/sessions"))
        .and(body_json(json!({ "title": "新会话", "userId": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c3",
            "agentId": 1,
            "title": "新会话",
            "status": "active",
            "isPinned": false,
            "userId": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client
        .chat()
        .create_session(1, Some("新会话"), Some(5))
        .await
        .unwrap();
    assert_eq!(session.id, "c3");
    assert_eq!(session.user_id, Some(5));
}

#[tokio::test]
async fn test_save_message_sets_session_id() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/api/sessions/s1/messages"))
        .and(body_json(json!({
            "sessionId": "s1",
            "role": "user",
            "content": "上个月的订单量？",
            "messageType": "text"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 100,
            "sessionId": "s1",
            "role": "user",
            "content": "上个月的订单量？",
            "messageType": "text"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = ChatMessage::user("上个月的订单量？");
    let saved = client.chat().save_message("s1", &message).await.unwrap();
    assert_eq!(saved.id, Some(100));
    assert_eq!(saved.role, MessageRole::User);
}

#[tokio::test]
async fn test_save_message_server_error_is_localized() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/api/sessions/s1/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let message = ChatMessage::assistant("SELECT 1").with_type(MessageType::Sql);
    let err = client.chat().save_message("s1", &message).await.unwrap_err();
    assert_eq!(err.to_string(), "保存消息失败");
}

#[tokio::test]
async fn test_get_session_messages() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/sessions/s1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "sessionId": "s1", "role": "user", "content": "hi", "messageType": "text" },
            {
                "id": 2,
                "sessionId": "s1",
                "role": "assistant",
                "content": "SELECT 1",
                "messageType": "sql",
                "metadata": "{\"rows\":1}"
            }
        ])))
        .mount(&server)
        .await;

    let messages = client.chat().get_session_messages("s1").await.unwrap();
    assert_eq!(messages[1].message_type, MessageType::Sql);
    assert_eq!(messages[1].metadata_value(), Some(json!({ "rows": 1 })));
}

#[tokio::test]
async fn test_unknown_message_type_survives_resave() {
    let (server, client) = common::setup().await;

    let stored = json!({
        "id": 3,
        "sessionId": "s2",
        "role": "assistant",
        "content": "<table></table>",
        "messageType": "html"
    });
    Mock::given(method("GET"))
        .and(path("/api/sessions/s2/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored.clone()])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/sessions/s2/messages"))
        .and(body_json(stored.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .expect(1)
        .mount(&server)
        .await;

    let service = client.chat();
    let messages = service.get_session_messages("s2").await.unwrap();
    assert_eq!(
        messages[0].message_type,
        MessageType::Other("html".to_string())
    );

    let saved = service.save_message("s2", &messages[0]).await.unwrap();
    assert_eq!(saved.message_type.as_str(), "html");
}

#[tokio::test]
async fn test_sessions_with_null_title_and_pin() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/agent/3/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "c3", "agentId": 3, "title": null, "status": "active", "isPinned": null }
        ])))
        .mount(&server)
        .await;

    let sessions = client.chat().get_agent_sessions(3).await.unwrap();
    assert_eq!(sessions[0].title, "");
    assert!(!sessions[0].is_pinned);
}

#[tokio::test]
async fn test_pin_session() {
    let (server, client) = common::setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/sessions/ok/pin"))
        .and(query_param("isPinned", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/sessions/bad/pin"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/sessions/broken/pin"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/sessions/forbidden/pin"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let chat = client.chat();
    assert!(chat.pin_session("ok", true).await.unwrap().success);

    let err = chat.pin_session("bad", true).await.unwrap_err();
    assert_eq!(err.to_string(), "isPinned参数不能为空");

    let err = chat.pin_session("broken", false).await.unwrap_err();
    assert_eq!(err.to_string(), "操作失败");

    let err = chat.pin_session("forbidden", false).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 403, .. }));
}

#[tokio::test]
async fn test_rename_blank_title_sends_nothing() {
    let (server, client) = common::setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for title in ["", "   ", "\t\n"] {
        let err = client.chat().rename_session("s1", title).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
        assert_eq!(err.to_string(), "标题不能为空");
    }
}

#[tokio::test]
async fn test_rename_trims_title() {
    let (server, client) = common::setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/sessions/s1/rename"))
        .and(query_param("title", "月度报表"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/sessions/s2/rename"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = client
        .chat()
        .rename_session("s1", "  月度报表 ")
        .await
        .unwrap();
    assert!(response.success);

    let err = client.chat().rename_session("s2", "x").await.unwrap_err();
    assert_eq!(err.to_string(), "重命名失败");
}

#[tokio::test]
async fn test_delete_and_clear_sessions() {
    let (server, client) = common::setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/sessions/s1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/agent/1/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "会话已清空"
        })))
        .mount(&server)
        .await;

    let err = client.chat().delete_session("s1").await.unwrap_err();
    assert_eq!(err.to_string(), "删除失败");

    let response = client.chat().clear_agent_sessions(1).await.unwrap();
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("会话已清空"));
}
