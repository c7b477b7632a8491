use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("telegram api returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

// Keeps the handler independent of the messaging provider
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    token: String,
    chat_id: String,
    timeout: Duration,
    attempts: u32,
    backoff: Duration,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String, timeout: Duration, attempts: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: "https://api.telegram.org".to_string(),
            token,
            chat_id,
            timeout,
            attempts: attempts.max(1),
            backoff: Duration::from_millis(500),
        }
    }

    #[cfg(test)]
    fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    #[cfg(test)]
    fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    async fn try_send(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);

        let res = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(NotifyError::Api { status, body })
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    // Each attempt is bounded by the per-request timeout; transient failures
    // get retried with doubling backoff, the last error is surfaced
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let mut delay = self.backoff;
        let mut attempt = 1;

        loop {
            match self.try_send(text).await {
                Ok(()) => return Ok(()),
                Err(e) if attempt < self.attempts => {
                    println!(
                        "[Notifier] attempt {}/{} failed: {}",
                        attempt, self.attempts, e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn notifier_for(server: &MockServer) -> TelegramNotifier {
        TelegramNotifier::new(
            "TESTTOKEN".to_string(),
            "42".to_string(),
            Duration::from_secs(2),
            3,
        )
        .with_api_base(&server.base_url())
        .with_backoff(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn posts_message_to_telegram_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/botTESTTOKEN/sendMessage")
                    .json_body(serde_json::json!({"chat_id": "42", "text": "hello"}));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({"ok": true}));
            })
            .await;

        notifier_for(&server).send("hello").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_rejection_surfaces_after_all_attempts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/botTESTTOKEN/sendMessage");
                then.status(401).body("unauthorized");
            })
            .await;

        let err = notifier_for(&server).send("hello").await.unwrap_err();

        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("unauthorized"));
        mock.assert_calls_async(3).await;
    }

    #[tokio::test]
    async fn succeeds_without_extra_calls() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/botTESTTOKEN/sendMessage");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({"ok": true}));
            })
            .await;

        notifier_for(&server).send("first").await.unwrap();
        notifier_for(&server).send("second").await.unwrap();

        mock.assert_calls_async(2).await;
    }
}
