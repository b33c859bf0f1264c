use async_trait::async_trait;

use business::domain::extraction::errors::ExtractionError;
use business::domain::extraction::model::{ExtractedProductsResponse, ImageUrl};
use business::domain::extraction::services::ProductExtractorService;

use crate::client::OpenAIClient;
use crate::prompt::PRODUCT_EXTRACTION_PROMPT;
use crate::schema::ExtractedProductsSchema;

/// Vision-capable model used for every extraction.
pub const EXTRACTION_MODEL: &str = "gpt-4o";

pub struct ProductExtractorOpenAI {
    client: OpenAIClient,
}

impl ProductExtractorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductExtractorService for ProductExtractorOpenAI {
    async fn extract(
        &self,
        image_url: &ImageUrl,
    ) -> Result<ExtractedProductsResponse, ExtractionError> {
        let extracted: ExtractedProductsSchema = self
            .client
            .extract_structured(
                EXTRACTION_MODEL,
                PRODUCT_EXTRACTION_PROMPT,
                std::slice::from_ref(image_url),
            )
            .await?;

        Ok(extracted.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use poem::endpoint::make;
    use poem::http::StatusCode;
    use poem::listener::{Acceptor, Listener, TcpListener};
    use poem::web::Json;
    use poem::{Endpoint, Request, Route, Server, post};
    use serde_json::{Value, json};

    use super::*;

    #[derive(Default, Clone)]
    struct Captured {
        body: Option<Value>,
        authorization: Option<String>,
    }

    async fn spawn_provider<E>(endpoint: E) -> String
    where
        E: Endpoint + 'static,
    {
        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .unwrap();
        let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();
        let app = Route::new().at("/v1/responses", post(endpoint));
        tokio::spawn(async move {
            let _ = Server::new_with_acceptor(acceptor).run(app).await;
        });
        format!("http://{addr}/v1")
    }

    fn fake_provider(
        status: StatusCode,
        reply: Value,
        captured: Arc<Mutex<Captured>>,
    ) -> impl Endpoint + 'static {
        make(move |req: Request| {
            let reply = reply.clone();
            let captured = captured.clone();
            async move {
                let authorization = req.header("authorization").map(str::to_string);
                let body: Value = req.into_body().into_json().await.unwrap_or(Value::Null);
                *captured.lock().unwrap() = Captured {
                    body: Some(body),
                    authorization,
                };
                (status, Json(reply))
            }
        })
    }

    fn extractor_for(base_url: String, timeout: Duration) -> ProductExtractorOpenAI {
        ProductExtractorOpenAI::new(OpenAIClient::with_settings(
            "sk-test".to_string(),
            base_url,
            timeout,
        )
        .unwrap())
    }

    fn reply_with_text(text: &str) -> Value {
        json!({
            "output": [{
                "type": "message",
                "role": "assistant",
                "content": [{"type": "output_text", "text": text}],
            }],
        })
    }

    fn shoe_url() -> ImageUrl {
        ImageUrl::parse("https://example.com/shoe.jpg").unwrap()
    }

    #[tokio::test]
    async fn should_extract_products_when_provider_returns_valid_json() {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let base_url = spawn_provider(fake_provider(
            StatusCode::OK,
            reply_with_text(
                r#"{"products":[{"id":1,"product_name":"Sneaker","color":"red","category":"footwear","description":"red running sneaker"}]}"#,
            ),
            captured.clone(),
        ))
        .await;
        let extractor = extractor_for(base_url, Duration::from_secs(5));

        let response = extractor.extract(&shoe_url()).await.unwrap();

        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].id, 1);
        assert_eq!(response.products[0].product_name, "Sneaker");
        assert_eq!(response.products[0].description, "red running sneaker");

        let captured = captured.lock().unwrap().clone();
        assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test"));
        let body = captured.body.unwrap();
        assert_eq!(body["model"], EXTRACTION_MODEL);
        assert_eq!(body["input"][0]["content"][0]["text"], PRODUCT_EXTRACTION_PROMPT);
        assert_eq!(
            body["input"][0]["content"][1]["image_url"],
            "https://example.com/shoe.jpg"
        );
        assert_eq!(
            body["text"]["format"]["name"],
            "ExtractedProductsResponse"
        );
    }

    #[tokio::test]
    async fn should_fail_validation_when_provider_returns_malformed_output() {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let base_url = spawn_provider(fake_provider(
            StatusCode::OK,
            reply_with_text(r#"{"products":[{"id":1,"product_name":"Sneaker"}]}"#),
            captured,
        ))
        .await;
        let extractor = extractor_for(base_url, Duration::from_secs(5));

        let result = extractor.extract(&shoe_url()).await;

        assert!(matches!(
            result.unwrap_err(),
            ExtractionError::SchemaValidation(_)
        ));
    }

    #[tokio::test]
    async fn should_report_configuration_error_when_key_rejected() {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let base_url = spawn_provider(fake_provider(
            StatusCode::UNAUTHORIZED,
            json!({"error": {"message": "Incorrect API key provided"}}),
            captured,
        ))
        .await;
        let extractor = extractor_for(base_url, Duration::from_secs(5));

        let result = extractor.extract(&shoe_url()).await;

        assert!(matches!(
            result.unwrap_err(),
            ExtractionError::Configuration(_)
        ));
    }

    #[tokio::test]
    async fn should_report_model_invocation_error_when_provider_fails() {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let base_url = spawn_provider(fake_provider(
            StatusCode::BAD_GATEWAY,
            json!({"error": {"message": "upstream failure"}}),
            captured,
        ))
        .await;
        let extractor = extractor_for(base_url, Duration::from_secs(5));

        let result = extractor.extract(&shoe_url()).await;

        assert!(matches!(
            result.unwrap_err(),
            ExtractionError::ModelInvocation(_)
        ));
    }

    #[tokio::test]
    async fn should_report_model_invocation_error_when_provider_unreachable() {
        // Nothing listens on the discard port.
        let extractor = extractor_for("http://127.0.0.1:9/v1".to_string(), Duration::from_secs(5));

        let result = extractor.extract(&shoe_url()).await;

        assert!(matches!(
            result.unwrap_err(),
            ExtractionError::ModelInvocation(_)
        ));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_provider_exceeds_timeout() {
        let base_url = spawn_provider(make(|_req: Request| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({}))
        }))
        .await;
        let extractor = extractor_for(base_url, Duration::from_millis(200));

        let result = extractor.extract(&shoe_url()).await;

        assert!(matches!(
            result.unwrap_err(),
            ExtractionError::ProviderUnavailable(_)
        ));
    }
}
