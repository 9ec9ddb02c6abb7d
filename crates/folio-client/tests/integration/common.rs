use httpmock::MockServer;
use serde_json::{Value, json};

use folio_core::config::LlmConfig;

pub const TEST_API_KEY: &str = "sk-test-key";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Route test logs through the libtest capture.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("folio=debug")
        .try_init();
}

/// LLM config pointed at the mock server, with a valid key.
pub fn llm_config(server: &MockServer) -> LlmConfig {
    LlmConfig {
        base_url: server.url("/v1"),
        ..Default::default()
    }
    .with_api_key(TEST_API_KEY)
}

/// Chat-completion response body with a single choice.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
