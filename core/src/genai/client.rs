//! Gemini client over the Generative Language REST API

use super::types::{image_data_uri, AspectRatio, Attachment, ImageSize, VideoAsset, VideoResolution};
use crate::config::GenAiConfig;
use crate::error::{GenAiError, Result};
use async_trait::async_trait;
use bytes::BytesMut;
use futures::StreamExt;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Trait for generative content services
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Answer a prompt, optionally about an attached media file
    async fn analyze_content(&self, prompt: &str, attachment: Option<Attachment>) -> Result<String>;

    /// Generate a 16:9 image; returns a `data:` URI
    async fn generate_image(&self, prompt: &str, size: ImageSize) -> Result<String>;

    /// Edit an image; returns a `data:` URI, or an empty string when the
    /// model answers without an image
    async fn edit_image(&self, image: Attachment, prompt: &str) -> Result<String>;

    /// Generate a video and download it once the operation completes
    async fn generate_video(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        resolution: VideoResolution,
    ) -> Result<VideoAsset>;
}

/// Gemini client
///
/// The credential is looked up on every call, so a missing key only fails
/// the operations that are actually used.
pub struct GeminiClient {
    client: Client,
    config: GenAiConfig,
}

impl GeminiClient {
    pub fn new(config: &GenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn api_key(&self) -> Result<&str> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(GenAiError::MissingCredential.into()),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn generate_content(&self, model: &str, request: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        let api_key = self.api_key()?;
        let response = self
            .client
            .post(self.endpoint(&format!("models/{}:generateContent", model)))
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(network)?;

        parse_json(response).await
    }

    async fn poll_operation(&self, name: &str) -> Result<Operation> {
        let api_key = self.api_key()?;
        let response = self
            .client
            .get(self.endpoint(name))
            .header("x-goog-api-key", api_key)
            .send()
            .await
            .map_err(network)?;

        parse_json(response).await
    }

    async fn download(&self, uri: &str) -> Result<VideoAsset> {
        let mut url = Url::parse(uri).map_err(|e| GenAiError::InvalidResponse {
            message: format!("Invalid video URI '{}': {}", uri, e),
        })?;
        url.query_pairs_mut().append_pair("key", self.api_key()?);

        let response = self.client.get(url).send().await.map_err(network)?;
        let response = check_status(response).await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());

        let mut stream = response.bytes_stream();
        let mut buffer = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk.map_err(network)?);
        }
        debug!("Downloaded {} bytes of video", buffer.len());

        Ok(VideoAsset {
            uri: uri.to_string(),
            content_type,
            bytes: buffer.freeze(),
        })
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn analyze_content(&self, prompt: &str, attachment: Option<Attachment>) -> Result<String> {
        info!("Analyzing content with {}", self.config.models.analysis);
        let request = GenerateContentRequest::new(attachment.as_ref(), prompt);
        let response = self
            .generate_content(&self.config.models.analysis, &request)
            .await?;

        let text = response.text();
        if text.is_empty() {
            Ok("No analysis generated.".to_string())
        } else {
            Ok(text)
        }
    }

    async fn generate_image(&self, prompt: &str, size: ImageSize) -> Result<String> {
        info!("Generating {} image with {}", size, self.config.models.image);
        let mut request = GenerateContentRequest::new(None, prompt);
        request.generation_config = Some(GenerationConfig {
            image_config: ImageConfig {
                image_size: size,
                aspect_ratio: AspectRatio::Landscape,
            },
        });

        let response = self.generate_content(&self.config.models.image, &request).await?;
        response
            .first_image()
            .map(image_data_uri)
            .ok_or_else(|| GenAiError::NoOutput("No image data received.").into())
    }

    async fn edit_image(&self, image: Attachment, prompt: &str) -> Result<String> {
        info!("Editing image with {}", self.config.models.image_edit);
        let request = GenerateContentRequest::new(Some(&image), prompt);
        let response = self
            .generate_content(&self.config.models.image_edit, &request)
            .await?;

        Ok(response.first_image().map(image_data_uri).unwrap_or_default())
    }

    async fn generate_video(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        resolution: VideoResolution,
    ) -> Result<VideoAsset> {
        let api_key = self.api_key()?;
        let model = &self.config.models.video;
        info!("Generating {} {} video with {}", resolution, aspect_ratio, model);

        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                number_of_videos: 1,
                resolution,
                aspect_ratio,
            },
        };
        let response = self
            .client
            .post(self.endpoint(&format!("models/{}:predictLongRunning", model)))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(network)?;
        let mut operation: Operation = parse_json(response).await?;

        let interval = Duration::from_millis(self.config.poll_interval_ms);
        while !operation.done {
            tokio::time::sleep(interval).await;
            debug!("Polling {}", operation.name);
            operation = self.poll_operation(&operation.name).await?;
        }

        if let Some(error) = operation.error {
            return Err(GenAiError::Api {
                status: error.code.unwrap_or_default(),
                message: error.message,
            }
            .into());
        }

        let uri = operation
            .video_uri()
            .ok_or(GenAiError::NoOutput("No video URI returned."))?
            .to_string();
        self.download(&uri).await
    }
}

fn network(error: reqwest::Error) -> crate::error::Error {
    GenAiError::Network {
        message: error.to_string(),
    }
    .into()
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body);
    Err(GenAiError::Api { status, message }.into())
}

async fn parse_json<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    response.json().await.map_err(|e| {
        GenAiError::InvalidResponse {
            message: format!("Failed to parse response: {}", e),
        }
        .into()
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// One user turn: the attachment (if any) followed by the prompt
    fn new(attachment: Option<&Attachment>, prompt: &str) -> Self {
        let mut parts = Vec::new();
        if let Some(attachment) = attachment {
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: attachment.mime.essence_str().to_string(),
                    data: attachment.to_base64(),
                }),
            });
        }
        parts.push(Part {
            text: Some(prompt.to_string()),
            inline_data: None,
        });
        Self {
            contents: vec![Content { parts }],
            generation_config: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    image_size: ImageSize,
    aspect_ratio: AspectRatio,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .into_iter()
            .flat_map(|candidate| candidate.content.parts.iter())
    }

    /// All text parts of the first candidate, concatenated
    fn text(&self) -> String {
        self.parts().filter_map(|part| part.text.as_deref()).collect()
    }

    fn first_image(&self) -> Option<&str> {
        self.parts()
            .find_map(|part| part.inline_data.as_ref())
            .map(|data| data.data.as_str())
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    number_of_videos: u32,
    resolution: VideoResolution,
    aspect_ratio: AspectRatio,
}

#[derive(Debug, Deserialize)]
struct Operation {
    name: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<OperationError>,
    #[serde(default)]
    response: Option<OperationResponse>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationResponse {
    #[serde(default)]
    generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateVideoResponse {
    #[serde(default)]
    generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Deserialize)]
struct GeneratedSample {
    video: Option<VideoRef>,
}

#[derive(Debug, Deserialize)]
struct VideoRef {
    uri: Option<String>,
}

impl Operation {
    fn video_uri(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()?
            .uri
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_credential_fails_each_call() {
        let client = GeminiClient::new(&GenAiConfig::default());

        let err = client.analyze_content("hello", None).await.unwrap_err();
        assert!(matches!(err, Error::GenAi(GenAiError::MissingCredential)));

        let err = client
            .generate_video("a city", AspectRatio::Landscape, VideoResolution::Hd)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GenAi(GenAiError::MissingCredential)));
    }

    #[test]
    fn test_request_shape() {
        let attachment = Attachment::new(mime::IMAGE_JPEG, &b"jpg"[..]);
        let mut request = GenerateContentRequest::new(Some(&attachment), "make it blue");
        request.generation_config = Some(GenerationConfig {
            image_config: ImageConfig {
                image_size: ImageSize::TwoK,
                aspect_ratio: AspectRatio::Landscape,
            },
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "parts": [
                        {"inlineData": {"mimeType": "image/jpeg", "data": "anBn"}},
                        {"text": "make it blue"}
                    ]
                }],
                "generationConfig": {
                    "imageConfig": {"imageSize": "2K", "aspectRatio": "16:9"}
                }
            })
        );
    }

    #[test]
    fn test_response_text_and_image() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here "},
                        {"inlineData": {"mimeType": "image/png", "data": "aGk="}},
                        {"text": "you go"}
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.text(), "Here you go");
        assert_eq!(response.first_image(), Some("aGk="));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), "");
        assert_eq!(empty.first_image(), None);
    }

    #[test]
    fn test_operation_parsing() {
        let pending: Operation =
            serde_json::from_value(json!({"name": "models/veo/operations/abc"})).unwrap();
        assert!(!pending.done);
        assert_eq!(pending.video_uri(), None);

        let done: Operation = serde_json::from_value(json!({
            "name": "models/veo/operations/abc",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [{"video": {"uri": "https://files.test/v1/abc:download?alt=media"}}]
                }
            }
        }))
        .unwrap();
        assert_eq!(
            done.video_uri(),
            Some("https://files.test/v1/abc:download?alt=media")
        );
    }

    #[test]
    fn test_predict_parameters() {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: "waves".to_string(),
            }],
            parameters: PredictParameters {
                number_of_videos: 1,
                resolution: VideoResolution::FullHd,
                aspect_ratio: AspectRatio::Portrait,
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap()["parameters"],
            json!({"numberOfVideos": 1, "resolution": "1080p", "aspectRatio": "9:16"})
        );
    }
}
