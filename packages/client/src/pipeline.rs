//! Validated submission: check raw form input, then send.
//!
//! Nothing is sent unless validation succeeds. Validation errors and
//! transport errors stay distinct so the caller can render field messages
//! next to inputs and show transport failures separately.

use std::future::Future;

use serde_json::Value;
use tracing::debug;

use mitra::forms::parse;
use mitra::{ChatMessageForm, CrisisAlertForm, FieldError, Form, MoodEntryForm, Validation};
use mitra_api::{Alert, ApiResponse, ChatMessage, MoodEntry};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Why a submission did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The input failed validation; nothing was sent.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),

    /// The input was valid but the call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validate `raw` as form `F`, and only if it is valid pass the typed payload
/// to `send`.
///
/// ```rust,ignore
/// let entry = submit(&raw, |form: MoodEntryForm| async move {
///     client.create_mood("s-1", &form).await
/// })
/// .await?;
/// ```
pub async fn submit<F, T, S, Fut>(raw: &Value, send: S) -> Result<T, SubmitError>
where
    F: Form,
    S: FnOnce(F) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match parse::<F>(raw) {
        Validation::Valid(form) => Ok(send(form).await?),
        Validation::Invalid(errors) => {
            debug!(errors = errors.len(), "submission rejected before send");
            Err(SubmitError::Invalid(errors))
        }
    }
}

impl ApiClient {
    /// Validate raw mood-entry input and create it for `student_id`.
    pub async fn submit_mood(
        &self,
        student_id: &str,
        raw: &Value,
    ) -> Result<ApiResponse<MoodEntry>, SubmitError> {
        submit(raw, |form: MoodEntryForm| async move {
            self.create_mood(student_id, &form).await
        })
        .await
    }

    /// Validate raw chat-message input and send it to its session.
    pub async fn submit_chat_message(
        &self,
        raw: &Value,
    ) -> Result<ApiResponse<ChatMessage>, SubmitError> {
        submit(raw, |form: ChatMessageForm| async move {
            self.send_chat_message(&form.session_id, &form).await
        })
        .await
    }

    /// Validate raw crisis-alert input and raise the alert.
    pub async fn submit_crisis_alert(
        &self,
        raw: &Value,
    ) -> Result<ApiResponse<Alert>, SubmitError> {
        submit(raw, |form: CrisisAlertForm| async move { self.crisis_alert(&form).await }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[tokio::test]
    async fn invalid_input_never_reaches_sender() {
        let calls = Cell::new(0);
        let out = submit(&json!({"mood": 6}), |_form: MoodEntryForm| {
            calls.set(calls.get() + 1);
            async { Ok::<_, ApiError>(()) }
        })
        .await;

        assert_eq!(calls.get(), 0);
        let Err(SubmitError::Invalid(errors)) = out else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "mood");
    }

    #[tokio::test]
    async fn valid_input_is_coerced_before_send() {
        let out = submit(&json!({"mood": "2", "notes": "tired"}), |form: MoodEntryForm| async move {
            Ok::<_, ApiError>(form)
        })
        .await
        .unwrap();
        assert_eq!(out.mood, 2);
        assert!(out.factors.is_empty());
    }

    #[tokio::test]
    async fn sender_errors_pass_through() {
        let out = submit(&json!({"mood": 3}), |_form: MoodEntryForm| async {
            Err::<(), _>(ApiError::Http {
                status: 503,
                message: "HTTP 503: Service Unavailable".into(),
            })
        })
        .await;
        assert!(matches!(out, Err(SubmitError::Api(ApiError::Http { status: 503, .. }))));
    }
}
