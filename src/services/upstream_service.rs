use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::models::{ApiResponse, CreateUserRequest, UpdateUserRequest};
use crate::utils::AppError;

/// Operações encaminhadas para o serviço upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl UpstreamOp {
    fn not_found_message(self) -> &'static str {
        match self {
            UpstreamOp::List => "no user data found",
            _ => "user not found",
        }
    }
}

/// Cliente do serviço de usuários upstream (uma chamada por operação, sem retry)
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_users(&self) -> Result<Vec<u8>, AppError> {
        self.call::<()>(UpstreamOp::List, Method::GET, self.base_url.clone(), None)
            .await
    }

    pub async fn get_user(&self, id: u64) -> Result<Vec<u8>, AppError> {
        self.call::<()>(UpstreamOp::Get, Method::GET, self.user_url(id), None)
            .await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<Vec<u8>, AppError> {
        self.call(
            UpstreamOp::Create,
            Method::POST,
            self.base_url.clone(),
            Some(request),
        )
        .await
    }

    pub async fn update_user(
        &self,
        id: u64,
        request: &UpdateUserRequest,
    ) -> Result<Vec<u8>, AppError> {
        self.call(UpstreamOp::Update, Method::PUT, self.user_url(id), Some(request))
            .await
    }

    pub async fn delete_user(&self, id: u64) -> Result<Vec<u8>, AppError> {
        self.call::<()>(UpstreamOp::Delete, Method::DELETE, self.user_url(id), None)
            .await
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn call<B: Serialize>(
        &self,
        op: UpstreamOp,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> Result<Vec<u8>, AppError> {
        log::debug!("➡️  {} {} ({:?})", method, url, op);

        let mut request = self
            .http
            .request(method, &url)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        log::debug!("⬅️  {} from {}", status, url);

        translate(op, status, &bytes)
    }
}

/// Traduz o status do upstream para o contrato do serviço
pub fn translate(op: UpstreamOp, status: StatusCode, body: &[u8]) -> Result<Vec<u8>, AppError> {
    if status.is_success() {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(b"null".to_vec());
        }
        return match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(_) => Ok(body.to_vec()),
            Err(e) => {
                log::warn!("Upstream {:?} returned a non-JSON body: {}", op, e);
                Err(AppError::UpstreamError("invalid upstream response body".into()))
            }
        };
    }

    match (status, op) {
        // Create só trata 400; 404 cai no erro genérico
        (StatusCode::NOT_FOUND, op) if op != UpstreamOp::Create => Err(AppError::UpstreamNotFound(
            op.not_found_message().to_string(),
        )),
        (StatusCode::BAD_REQUEST, UpstreamOp::Create) => {
            match serde_json::from_slice::<ApiResponse>(body) {
                Ok(_) => Err(AppError::UpstreamRejected(
                    String::from_utf8_lossy(body).into_owned(),
                )),
                Err(_) => Err(AppError::UpstreamValidationError(
                    "create failed: validation error".into(),
                )),
            }
        }
        (StatusCode::BAD_REQUEST, UpstreamOp::Update) => Err(AppError::UpstreamValidationError(
            "update failed: validation error".into(),
        )),
        _ => Err(AppError::UpstreamError(status.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_translate_success_is_verbatim() {
        let body = br#"[{"id":1,"name":"a"},  {"id":2,"name":"b"}]"#;
        let out = translate(UpstreamOp::List, StatusCode::OK, body).unwrap();
        assert_eq!(out, body.to_vec());
    }

    #[test]
    fn test_translate_empty_success_is_null() {
        let out = translate(UpstreamOp::Delete, StatusCode::NO_CONTENT, b"").unwrap();
        assert_eq!(out, b"null".to_vec());
    }

    #[test]
    fn test_translate_non_json_success() {
        let err = translate(UpstreamOp::Get, StatusCode::OK, b"<html>").unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(_)));
    }

    #[test]
    fn test_translate_not_found_messages() {
        let list = translate(UpstreamOp::List, StatusCode::NOT_FOUND, b"").unwrap_err();
        assert_eq!(list.to_string(), "no user data found");

        for op in [UpstreamOp::Get, UpstreamOp::Update, UpstreamOp::Delete] {
            let err = translate(op, StatusCode::NOT_FOUND, b"").unwrap_err();
            assert!(matches!(err, AppError::UpstreamNotFound(_)));
            assert_eq!(err.to_string(), "user not found");
        }
    }

    #[test]
    fn test_translate_bad_request_per_operation() {
        let envelope = br#"{"success":false,"message":"Email already exists","data":null}"#;
        match translate(UpstreamOp::Create, StatusCode::BAD_REQUEST, envelope) {
            Err(AppError::UpstreamRejected(body)) => assert_eq!(body.as_bytes(), envelope),
            other => panic!("unexpected {:?}", other),
        }

        let err = translate(UpstreamOp::Create, StatusCode::BAD_REQUEST, b"oops").unwrap_err();
        assert_eq!(err.to_string(), "create failed: validation error");

        let err = translate(UpstreamOp::Update, StatusCode::BAD_REQUEST, envelope).unwrap_err();
        assert_eq!(err.to_string(), "update failed: validation error");

        // 400 has no special meaning for reads or deletes
        for op in [UpstreamOp::List, UpstreamOp::Get, UpstreamOp::Delete] {
            let err = translate(op, StatusCode::BAD_REQUEST, b"").unwrap_err();
            assert!(matches!(err, AppError::UpstreamError(_)));
        }
    }

    #[test]
    fn test_translate_status_table_per_operation() {
        let envelope = br#"{"success":false,"message":"bad","data":null}"#;

        fn kind(e: &AppError) -> &'static str {
            match e {
                AppError::UpstreamNotFound(_) => "not_found",
                AppError::UpstreamError(_) => "generic",
                AppError::UpstreamRejected(_) => "rejected",
                AppError::UpstreamValidationError(_) => "invalid",
                _ => "other",
            }
        }

        let cases = vec![
            (UpstreamOp::List, StatusCode::NOT_FOUND, "not_found"),
            (UpstreamOp::List, StatusCode::BAD_REQUEST, "generic"),
            (UpstreamOp::List, StatusCode::INTERNAL_SERVER_ERROR, "generic"),
            (UpstreamOp::Get, StatusCode::NOT_FOUND, "not_found"),
            (UpstreamOp::Get, StatusCode::BAD_REQUEST, "generic"),
            (UpstreamOp::Get, StatusCode::INTERNAL_SERVER_ERROR, "generic"),
            (UpstreamOp::Create, StatusCode::NOT_FOUND, "generic"),
            (UpstreamOp::Create, StatusCode::BAD_REQUEST, "rejected"),
            (UpstreamOp::Create, StatusCode::INTERNAL_SERVER_ERROR, "generic"),
            (UpstreamOp::Update, StatusCode::NOT_FOUND, "not_found"),
            (UpstreamOp::Update, StatusCode::BAD_REQUEST, "invalid"),
            (UpstreamOp::Update, StatusCode::INTERNAL_SERVER_ERROR, "generic"),
            (UpstreamOp::Delete, StatusCode::NOT_FOUND, "not_found"),
            (UpstreamOp::Delete, StatusCode::BAD_REQUEST, "generic"),
            (UpstreamOp::Delete, StatusCode::INTERNAL_SERVER_ERROR, "generic"),
        ];

        for (op, status, expected) in cases {
            let err = translate(op, status, envelope).unwrap_err();
            assert_eq!(kind(&err), expected, "{:?} {}", op, status);
        }
    }

    #[test]
    fn test_translate_create_not_found_is_generic() {
        let err = translate(UpstreamOp::Create, StatusCode::NOT_FOUND, b"").unwrap_err();
        assert_eq!(err.to_string(), "upstream request failed: 404 Not Found");
        assert_eq!(
            actix_web::ResponseError::status_code(&err),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_translate_other_status_carries_text() {
        let err = translate(UpstreamOp::Get, StatusCode::BAD_GATEWAY, b"").unwrap_err();
        assert_eq!(err.to_string(), "upstream request failed: 502 Bad Gateway");
    }

    #[tokio::test]
    async fn test_client_hits_expected_urls() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/users/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "user deleted", "data": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&format!("{}/api/users/", server.uri()));
        assert_eq!(client.base_url(), format!("{}/api/users", server.uri()));

        assert_eq!(client.list_users().await.unwrap(), b"[]".to_vec());
        let deleted: serde_json::Value =
            serde_json::from_slice(&client.delete_user(7).await.unwrap()).unwrap();
        assert_eq!(deleted["success"], true);
    }

    #[tokio::test]
    async fn test_create_sends_full_payload() {
        let server = MockServer::start().await;
        let request = CreateUserRequest {
            name: "New".into(),
            email: "new@example.com".into(),
            password: "password123".into(),
        };

        Mock::given(method("POST"))
            .and(path("/api/users"))
            .and(body_json(json!({
                "name": "New", "email": "new@example.com", "password": "password123"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&format!("{}/api/users", server.uri()));
        assert!(client.create_user(&request).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        // Grab a free port and close it again so nothing is listening
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = UpstreamClient::new(&format!("http://127.0.0.1:{}/api/users", port));

        let err = client.get_user(1).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }
}
