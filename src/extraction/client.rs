use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use super::error::ExtractionError;
use super::types::ExtractedRecipe;

/// Sends a recipe source document to an extraction service and returns the
/// structured metadata it derives.
///
/// The trait exists so the orchestrator can be exercised against test doubles
/// without a live endpoint.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(
        &self,
        document: Vec<u8>,
        filename: &str,
    ) -> Result<ExtractedRecipe, ExtractionError>;
}

/// HTTP client for the external extraction endpoint.
pub struct ExtractionClient {
    client: Client,
    endpoint: String,
}

impl ExtractionClient {
    /// Create a client pointing at the configured extraction endpoint.
    ///
    /// No per-call timeout is set: the sync deadline is enforced at the
    /// orchestrator's collection boundary, so a slow call can occupy one
    /// worker for the whole job window but never blocks its siblings.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Extractor for ExtractionClient {
    async fn extract(
        &self,
        document: Vec<u8>,
        filename: &str,
    ) -> Result<ExtractedRecipe, ExtractionError> {
        let part = Part::bytes(document).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ExtractionError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let extracted = serde_json::from_str::<ExtractedRecipe>(&body)?;
        Ok(extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn extract_parses_success_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/extract"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{
                    "title": "Pão de Queijo",
                    "description": "Cheese bread bites.",
                    "cook_time": 25,
                    "nutrition_info": {"calories_per_serving": 120, "net_carbs_per_serving": 9}
                }"#,
            ))
            .mount(&server)
            .await;

        let client = ExtractionClient::new(format!("{}/extract", server.uri()));
        let extracted = client
            .extract(b"%PDF-1.4 fake".to_vec(), "pao-de-queijo.pdf")
            .await
            .unwrap();

        assert_eq!(extracted.title, "Pão de Queijo");
        assert_eq!(extracted.cook_time, 25);
    }

    #[tokio::test]
    async fn extract_fails_on_non_200_with_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ExtractionClient::new(server.uri());
        let err = client.extract(vec![1, 2, 3], "broken.pdf").await.unwrap_err();

        match err {
            ExtractionError::UnexpectedStatus { status } => assert_eq!(status, 500),
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn extract_fails_on_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = ExtractionClient::new(server.uri());
        let err = client.extract(vec![0], "weird.pdf").await.unwrap_err();

        assert!(matches!(err, ExtractionError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn extract_fails_on_transport_error() {
        // Nothing listens on this port.
        let client = ExtractionClient::new("http://127.0.0.1:1/extract".to_string());
        let err = client.extract(vec![0], "unreachable.pdf").await.unwrap_err();

        assert!(matches!(err, ExtractionError::Transport(_)));
    }
}
