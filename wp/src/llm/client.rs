//! LlmClient trait definition

use async_trait::async_trait;
use serde_json::Value;

use super::LlmError;

/// Stateless content generation client - each call is independent
///
/// No conversation state is maintained between calls; every request
/// carries its full prompt. Implementations must be safe to share across
/// tasks (`Send + Sync`) since overlapping generations are allowed.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate free-form prose for a prompt
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError>;

    /// Generate JSON constrained by a response schema
    ///
    /// The provider is asked for `application/json` output matching the
    /// schema; the decoded value is returned as-is for the caller to
    /// interpret.
    async fn generate_json(&self, prompt: &str, schema: Value) -> Result<Value, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Scripted reply for the mock client
    #[derive(Debug, Clone)]
    pub enum MockReply {
        Text(String),
        Json(Value),
        Fail(String),
    }

    /// Mock LLM client for unit tests
    pub struct MockLlmClient {
        replies: Mutex<Vec<MockReply>>,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        pub fn new(replies: Vec<MockReply>) -> Self {
            debug!(reply_count = %replies.len(), "MockLlmClient::new: called");
            Self {
                replies: Mutex::new(replies),
                call_count: AtomicUsize::new(0),
            }
        }

        /// A client whose every call fails
        pub fn failing() -> Self {
            Self::new(vec![])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        fn next_reply(&self) -> Result<MockReply, LlmError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                debug!("MockLlmClient: no more scripted replies");
                return Err(LlmError::InvalidResponse("No more mock replies".to_string()));
            }
            Ok(replies.remove(0))
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
            debug!("MockLlmClient::generate_text: called");
            match self.next_reply()? {
                MockReply::Text(text) => Ok(text),
                MockReply::Json(value) => Ok(value.to_string()),
                MockReply::Fail(message) => Err(LlmError::InvalidResponse(message)),
            }
        }

        async fn generate_json(&self, _prompt: &str, _schema: Value) -> Result<Value, LlmError> {
            debug!("MockLlmClient::generate_json: called");
            match self.next_reply()? {
                MockReply::Json(value) => Ok(value),
                MockReply::Text(text) => serde_json::from_str(&text).map_err(LlmError::Json),
                MockReply::Fail(message) => Err(LlmError::InvalidResponse(message)),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_mock_client_returns_replies_in_order() {
            let client = MockLlmClient::new(vec![
                MockReply::Text("first".to_string()),
                MockReply::Text("second".to_string()),
            ]);

            assert_eq!(client.generate_text("p").await.unwrap(), "first");
            assert_eq!(client.generate_text("p").await.unwrap(), "second");
            assert_eq!(client.call_count(), 2);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockLlmClient::failing();
            assert!(client.generate_text("p").await.is_err());
            assert!(client.generate_json("p", json!({})).await.is_err());
        }

        #[tokio::test]
        async fn test_mock_json_reply() {
            let client = MockLlmClient::new(vec![MockReply::Json(json!([{"title": "x"}]))]);
            let value = client.generate_json("p", json!({})).await.unwrap();
            assert!(value.is_array());
        }
    }
}
