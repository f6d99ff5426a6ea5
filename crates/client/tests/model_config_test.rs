// Integration tests for ModelConfigService against a mock backend

mod common;

use dataagent_client::contracts::{ModelConfig, ModelType};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn qwen() -> ModelConfig {
    ModelConfig::new(
        "dashscope",
        "sk-test",
        "https://dashscope.aliyuncs.com/compatible-mode",
        "qwen-plus",
        ModelType::Chat,
    )
    .with_temperature(0.1)
    .with_max_tokens(2000)
}

#[tokio::test]
async fn test_list_without_data_is_empty() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/model-config/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let configs = client.model_configs().list().await.unwrap();
    assert!(configs.is_empty());
}

#[tokio::test]
async fn test_add_then_list_round_trip() {
    let (server, client) = common::setup().await;
    let config = qwen();

    let mut stored = serde_json::to_value(&config).unwrap();
    stored["id"] = json!(1);
    stored["isActive"] = json!(true);

    Mock::given(method("POST"))
        .and(path("/api/model-config/add"))
        .and(body_json(serde_json::to_value(&config).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": "配置已保存"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/model-config/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [stored]
        })))
        .mount(&server)
        .await;

    let service = client.model_configs();
    assert!(service.add(&config).await.unwrap());

    let configs = service.list().await.unwrap();
    let fetched = ModelConfig {
        id: None,
        is_active: None,
        ..configs[0].clone()
    };
    assert_eq!(fetched, config);
    assert!(configs[0].is_active());
}

#[tokio::test]
async fn test_update_activate_delete() {
    let (server, client) = common::setup().await;
    let config = ModelConfig {
        id: Some(4),
        ..qwen()
    };

    Mock::given(method("PUT"))
        .and(path("/api/model-config/update"))
        .and(body_json(serde_json::to_value(&config).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/model-config/activate/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/model-config/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "不能删除激活中的配置"
        })))
        .mount(&server)
        .await;

    let service = client.model_configs();
    assert!(service.update(&config).await.unwrap());
    assert!(service.activate(4).await.unwrap());

    let response = service.delete(4).await.unwrap();
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("不能删除激活中的配置"));
}

#[tokio::test]
async fn test_connection_result_is_returned_as_is() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/api/model-config/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "401 Unauthorized"
        })))
        .mount(&server)
        .await;

    let response = client.model_configs().test_connection(&qwen()).await.unwrap();
    assert!(!response.success);
    assert!(response.data.is_none());
}
