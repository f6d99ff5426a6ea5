// Integration tests for BusinessKnowledgeService against a mock backend

mod common;

use dataagent_client::contracts::{
    BusinessKnowledge, CreateBusinessKnowledgeRequest, UpdateBusinessKnowledgeRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn create_request() -> CreateBusinessKnowledgeRequest {
    CreateBusinessKnowledgeRequest {
        business_term: "复购率".to_string(),
        description: "Share of customers with two or more orders".to_string(),
        synonyms: "回购率,repeat rate".to_string(),
        is_recall: true,
        agent_id: 7,
    }
}

#[tokio::test]
async fn test_null_text_fields_decode_as_empty() {
    let (server, client) = common::setup().await;

    let stored = json!({
        "id": 5,
        "agentId": 1,
        "businessTerm": "DAU",
        "description": null,
        "synonyms": null,
        "isRecall": null,
        "embeddingStatus": "PENDING"
    });
    Mock::given(method("GET"))
        .and(path("/api/business-knowledge"))
        .and(query_param("agentId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [stored.clone()]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/business-knowledge/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": stored
        })))
        .mount(&server)
        .await;

    let service = client.business_knowledge();
    let entries = service.list(1, None).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].synonyms, "");
    assert!(entries[0].synonym_list().is_empty());
    assert!(!entries[0].is_recall);

    let entry = service.get(5).await.unwrap().unwrap();
    assert_eq!(entry.description, "");
    assert_eq!(entry.business_term, "DAU");
}

#[tokio::test]
async fn test_list_with_keyword() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/business-knowledge"))
        .and(query_param("agentId", "7"))
        .and(query_param("keyword", "GMV"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": 1,
                "agentId": 7,
                "businessTerm": "GMV",
                "description": "Gross merchandise volume",
                "synonyms": "成交额",
                "isRecall": true,
                "embeddingStatus": "COMPLETED"
            }]
        })))
        .mount(&server)
        .await;

    let entries = client
        .business_knowledge()
        .list(7, Some("GMV"))
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].business_term, "GMV");
}

#[tokio::test]
async fn test_list_without_data_is_empty() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/business-knowledge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let entries = client.business_knowledge().list(7, None).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_not_found_is_benign() {
    let (server, client) = common::setup().await;

    Mock::given(path("/api/business-knowledge/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = client.business_knowledge();
    assert!(service.get(404).await.unwrap().is_none());

    let update = UpdateBusinessKnowledgeRequest {
        business_term: "x".to_string(),
        description: String::new(),
        synonyms: String::new(),
        agent_id: 7,
    };
    assert!(service.update(404, &update).await.unwrap().is_none());
    assert!(!service.delete(404).await.unwrap());
}

#[tokio::test]
async fn test_delete_reports_success_flag() {
    let (server, client) = common::setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/business-knowledge/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "still referenced"
        })))
        .mount(&server)
        .await;

    assert!(!client.business_knowledge().delete(3).await.unwrap());
}

#[tokio::test]
async fn test_recall_and_refresh() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/api/business-knowledge/recall/3"))
        .and(query_param("isRecall", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/business-knowledge/retry-embedding/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/business-knowledge/refresh-vector-store"))
        .and(query_param("agentId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let service = client.business_knowledge();
    assert!(service.recall_knowledge(3, true).await.unwrap());
    assert!(service.retry_embedding(3).await.unwrap());
    assert!(service.refresh_all_knowledge_to_vector_store(7).await.unwrap());
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (server, client) = common::setup().await;

    let request = create_request();
    let stored = json!({
        "id": 21,
        "agentId": 7,
        "businessTerm": request.business_term,
        "description": request.description,
        "synonyms": request.synonyms,
        "isRecall": true,
        "embeddingStatus": "PENDING",
        "createdTime": "2025-06-01 12:00:00"
    });

    Mock::given(method("POST"))
        .and(path("/api/business-knowledge"))
        .and(body_json(serde_json::to_value(&request).unwrap()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": stored })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/business-knowledge/21"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": stored })),
        )
        .mount(&server)
        .await;

    let service = client.business_knowledge();
    let created = service.create(&request).await.unwrap();
    let fetched: BusinessKnowledge = service.get(created.id.unwrap()).await.unwrap().unwrap();

    assert_eq!(fetched.business_term, request.business_term);
    assert_eq!(fetched.description, request.description);
    assert_eq!(fetched.synonyms, request.synonyms);
    assert_eq!(fetched.is_recall, request.is_recall);
    assert_eq!(fetched.agent_id, request.agent_id);
}
