use reqwest::StatusCode;
use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use business::domain::extraction::errors::ExtractionError;
use business::domain::extraction::model::ImageUrl;

use crate::client::OpenAIClient;

/// Generates the JSON schema document for `T`, with every subschema
/// inlined so the provider receives a single self-contained object.
pub fn schema_document<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.meta_schema = None;
        s.inline_subschemas = true;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();
    serde_json::to_value(root).unwrap_or_else(|_| json!({ "type": "object" }))
}

/// Name under which the schema is registered with the provider.
/// Only `[a-zA-Z0-9_-]` is accepted there.
fn schema_name<T: JsonSchema>() -> String {
    sanitize_schema_name(&T::schema_name())
}

fn sanitize_schema_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

pub fn build_request_body(
    model: &str,
    prompt: &str,
    image_urls: &[ImageUrl],
    schema_name: &str,
    schema: Value,
) -> Value {
    let mut content = vec![json!({
        "type": "input_text",
        "text": prompt,
    })];
    content.extend(image_urls.iter().map(|url| {
        json!({
            "type": "input_image",
            "image_url": url.as_str(),
            "detail": "auto",
        })
    }));

    json!({
        "model": model,
        "input": [
            {
                "role": "user",
                "content": content,
            },
        ],
        "text": {
            "format": {
                "type": "json_schema",
                "name": schema_name,
                "schema": schema,
                "strict": false,
            },
        },
        "temperature": 0.1,
    })
}

/// Pulls the first `output_text` out of a Responses API payload.
pub fn output_text(data: &Value) -> Result<&str, ExtractionError> {
    let content = data["output"]
        .as_array()
        .and_then(|outputs| outputs.iter().find(|o| o["type"] == "message"))
        .and_then(|msg| msg["content"].as_array())
        .ok_or_else(|| {
            ExtractionError::ModelInvocation("response has no message output".to_string())
        })?;

    if let Some(refusal) = content
        .iter()
        .find(|c| c["type"] == "refusal")
        .and_then(|c| c["refusal"].as_str())
    {
        return Err(ExtractionError::ModelInvocation(format!(
            "model refused: {refusal}"
        )));
    }

    content
        .iter()
        .find(|c| c["type"] == "output_text")
        .and_then(|c| c["text"].as_str())
        .ok_or_else(|| ExtractionError::ModelInvocation("response has no output_text".to_string()))
}

/// Decodes model text into `T`, reading the first JSON value that starts
/// at the first `{`. Prose or markdown fences around it are ignored;
/// anything that does not match the schema is rejected.
pub fn parse_structured<T: DeserializeOwned>(content: &str) -> Result<T, ExtractionError> {
    let start = content.find('{').ok_or_else(|| {
        ExtractionError::SchemaValidation("no JSON object in model output".to_string())
    })?;

    serde_json::Deserializer::from_str(&content[start..])
        .into_iter::<T>()
        .next()
        .ok_or_else(|| {
            ExtractionError::SchemaValidation("no JSON object in model output".to_string())
        })?
        .map_err(|e| ExtractionError::SchemaValidation(e.to_string()))
}

fn provider_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

/// Maps a non-success provider status to the extraction error taxonomy.
pub fn map_status(status: StatusCode, body: &str) -> ExtractionError {
    let message = provider_message(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ExtractionError::Configuration(format!("provider rejected credential: {message}"))
        }
        StatusCode::BAD_REQUEST => {
            let lower = message.to_lowercase();
            if ["image", "url", "download"]
                .iter()
                .any(|needle| lower.contains(needle))
            {
                ExtractionError::InvalidRequest(message)
            } else {
                ExtractionError::ModelInvocation(format!("{status}: {message}"))
            }
        }
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
            ExtractionError::ProviderUnavailable(format!("{status}: {message}"))
        }
        _ => ExtractionError::ModelInvocation(format!("{status}: {message}")),
    }
}

fn map_transport_error(err: reqwest::Error) -> ExtractionError {
    if err.is_timeout() {
        ExtractionError::ProviderUnavailable(format!("provider timed out: {err}"))
    } else {
        ExtractionError::ModelInvocation(err.to_string())
    }
}

impl OpenAIClient {
    /// Sends the prompt and image references to `model` and decodes the
    /// answer into `T`, whose JSON schema constrains the model output.
    pub async fn extract_structured<T>(
        &self,
        model: &str,
        prompt: &str,
        image_urls: &[ImageUrl],
    ) -> Result<T, ExtractionError>
    where
        T: DeserializeOwned + JsonSchema,
    {
        let body = build_request_body(
            model,
            prompt,
            image_urls,
            &schema_name::<T>(),
            schema_document::<T>(),
        );

        let response = self
            .client
            .post(self.responses_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(map_status(status, &text));
        }

        let data: Value = response.json().await.map_err(map_transport_error)?;

        parse_structured(output_text(&data)?)
    }
}
