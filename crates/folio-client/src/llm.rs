use folio_core::config::LlmConfig;
use folio_core::error::AppError;
use folio_core::traits::Transformer;
use folio_core::util::strip_code_fences;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an assistant that converts articles into clean HTML following the given guidelines.";

const PROMPT_GUIDELINES: &str = "\
Convert the article below into clean HTML according to these guidelines:
1. Use appropriate HTML tags to structure the content (e.g. <h1>, <h2>, <p>).
2. Mark the places where an illustration belongs with an <img> tag whose src attribute is \"image_placeholder.jpg\".
3. Give every image an alt attribute containing the exact prompt that can be used to generate that illustration.
4. Put a caption under each image using a <figcaption> tag.
5. Do not use CSS or JavaScript. Return only the content to be embedded, without <html>, <head> or <body> tags.
6. Make sure to insert images in several fitting places throughout the article.";

const PROMPT_CLOSING: &str = "\
Note: return only raw HTML, without any extra markup, comments or Markdown formatting.";

/// Build the user prompt for an article. The article is embedded verbatim.
pub fn build_prompt(article: &str) -> String {
    format!("{PROMPT_GUIDELINES}\n\nArticle:\n{article}\n\n{PROMPT_CLOSING}")
}

/// OpenAI-compatible chat-completion client that turns articles into HTML.
///
/// Works with any endpoint exposing `POST {base_url}/chat/completions`.
/// The API key is checked when the client is built, so a missing key fails
/// before any request goes out.
#[derive(Clone)]
pub struct OpenAiTransformer {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    system_prompt: String,
}

impl OpenAiTransformer {
    pub fn new(config: &LlmConfig) -> Result<Self, AppError> {
        let api_key = config.require_api_key()?.to_string();
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            AppError::LlmRequestFailed(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            system_prompt: config
                .system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        })
    }

    fn chat_request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                Message {
                    role: "system",
                    content: &self.system_prompt,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

// ---- OpenAI API types ----

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn send_error(e: reqwest::Error) -> AppError {
    if e.is_builder() || e.is_connect() {
        tracing::error!(error = %e, "LLM request could not be sent");
        AppError::LlmRequestFailed(e.to_string())
    } else {
        tracing::error!(error = %e, "No response received from LLM provider");
        AppError::LlmNoResponse(e.to_string())
    }
}

impl Transformer for OpenAiTransformer {
    async fn transform(&self, article: &str) -> Result<String, AppError> {
        let prompt = build_prompt(article);
        let request = self.chat_request(&prompt);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status_code, %body, "LLM provider returned an error status");

            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {status_code}: {body}"));

            return Err(AppError::LlmStatus {
                status_code,
                message,
            });
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, "LLM response body could not be read");
            AppError::LlmNoResponse(format!("Failed to read response body: {e}"))
        })?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(AppError::EmptyCompletion)?;

        Ok(strip_code_fences(&content).to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }
}
