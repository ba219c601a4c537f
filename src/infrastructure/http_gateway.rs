// HTTP gateway implementation over the indicators endpoint
use crate::application::indicator_gateway::{GatewayError, IndicatorGateway};
use crate::domain::indicator::Indicator;
use crate::domain::mutation::MutationRequest;
use async_trait::async_trait;
use reqwest::header;

const INDICATORS_PATH: &str = "/tracking-progress/v1/indicators";

#[derive(Debug, Clone)]
pub struct HttpIndicatorGateway {
    client: reqwest::Client,
    indicators_url: String,
}

impl HttpIndicatorGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            indicators_url: format!("{}{}", base_url.trim_end_matches('/'), INDICATORS_PATH),
        }
    }

    async fn send_mutation(
        &self,
        method: reqwest::Method,
        request: &MutationRequest,
    ) -> Result<(), GatewayError> {
        tracing::debug!("{} {} name={}", method, self.indicators_url, request.name);

        let response = self
            .client
            .request(method, &self.indicators_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::error!("Indicators endpoint rejected mutation with status {}", status);
            Err(GatewayError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl IndicatorGateway for HttpIndicatorGateway {
    async fn list_indicators(&self) -> Result<Vec<Indicator>, GatewayError> {
        tracing::debug!("GET {}", self.indicators_url);

        let response = self
            .client
            .get(&self.indicators_url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Indicators endpoint rejected list with status {}", status);
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let ids: Vec<String> =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(ids.into_iter().map(Indicator::new).collect())
    }

    async fn add_indicator(&self, request: &MutationRequest) -> Result<(), GatewayError> {
        self.send_mutation(reqwest::Method::POST, request).await
    }

    async fn remove_indicator(&self, request: &MutationRequest) -> Result<(), GatewayError> {
        self.send_mutation(reqwest::Method::DELETE, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct RecordedMutation {
        content_type: String,
        accept: String,
        name: String,
    }

    type Recorder = Arc<Mutex<Vec<RecordedMutation>>>;

    fn record(recorder: &Recorder, headers: &HeaderMap, body: &serde_json::Value) {
        let header_value = |key: &str| {
            headers
                .get(key)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        recorder.lock().unwrap().push(RecordedMutation {
            content_type: header_value("content-type"),
            accept: header_value("accept"),
            name: body["name"].as_str().unwrap_or_default().to_string(),
        });
    }

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_list_decodes_identifier_array() {
        let router = Router::new().route(
            "/tracking-progress/v1/indicators",
            get(|| async { Json(vec!["flood-risk-index", "bridges"]) }),
        );
        let base_url = spawn_stub(router).await;

        let gateway = HttpIndicatorGateway::new(&base_url);
        let indicators = gateway.list_indicators().await.unwrap();

        let ids: Vec<&str> = indicators.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["flood-risk-index", "bridges"]);
    }

    #[tokio::test]
    async fn test_list_rejected_status_is_discriminated() {
        let router = Router::new().route(
            "/tracking-progress/v1/indicators",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base_url = spawn_stub(router).await;

        let gateway = HttpIndicatorGateway::new(&base_url);
        let error = gateway.list_indicators().await.unwrap_err();

        assert_eq!(error, GatewayError::Rejected { status: 500 });
    }

    #[tokio::test]
    async fn test_list_undecodable_body_is_discriminated() {
        let router = Router::new().route(
            "/tracking-progress/v1/indicators",
            get(|| async { "not a json array" }),
        );
        let base_url = spawn_stub(router).await;

        let gateway = HttpIndicatorGateway::new(&base_url);
        let error = gateway.list_indicators().await.unwrap_err();

        assert!(matches!(error, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_add_posts_json_body_with_negotiation_headers() {
        let recorder: Recorder = Arc::new(Mutex::new(Vec::new()));
        let rec = recorder.clone();
        let router = Router::new().route(
            "/tracking-progress/v1/indicators",
            post(
                move |headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                    record(&rec, &headers, &body);
                    StatusCode::CREATED
                },
            ),
        );
        let base_url = spawn_stub(router).await;

        let gateway = HttpIndicatorGateway::new(&base_url);
        let request = MutationRequest::from_field("  flood-risk-index ");
        gateway.add_indicator(&request).await.unwrap();

        let recorded = recorder.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].content_type.starts_with("application/json"));
        assert_eq!(recorded[0].accept, "application/json");
        assert_eq!(recorded[0].name, "flood-risk-index");
    }

    #[tokio::test]
    async fn test_remove_sends_delete_with_json_body() {
        let recorder: Recorder = Arc::new(Mutex::new(Vec::new()));
        let rec = recorder.clone();
        let router = Router::new().route(
            "/tracking-progress/v1/indicators",
            delete(
                move |headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                    record(&rec, &headers, &body);
                    StatusCode::OK
                },
            ),
        );
        let base_url = spawn_stub(router).await;

        let gateway = HttpIndicatorGateway::new(&base_url);
        let request = MutationRequest::from_field("flood-risk-index");
        gateway.remove_indicator(&request).await.unwrap();

        let recorded = recorder.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].content_type.starts_with("application/json"));
        assert_eq!(recorded[0].name, "flood-risk-index");
    }

    #[tokio::test]
    async fn test_remove_not_found_is_rejected() {
        let router = Router::new().route(
            "/tracking-progress/v1/indicators",
            delete(|| async { StatusCode::NOT_FOUND }),
        );
        let base_url = spawn_stub(router).await;

        let gateway = HttpIndicatorGateway::new(&base_url);
        let request = MutationRequest::from_field("no-such-indicator");
        let error = gateway.remove_indicator(&request).await.unwrap_err();

        assert_eq!(error, GatewayError::Rejected { status: 404 });
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpIndicatorGateway::new(&format!("http://{addr}"));
        let error = gateway.list_indicators().await.unwrap_err();

        assert!(matches!(error, GatewayError::Network(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let gateway = HttpIndicatorGateway::new("http://localhost:8080/");
        assert_eq!(
            gateway.indicators_url,
            "http://localhost:8080/tracking-progress/v1/indicators"
        );
    }
}
