//! AI chat page
//!
//! The transcript lives only for the duration of one invocation (or one
//! interactive session). A failed request never surfaces as an error: the
//! assistant turn is replaced with a fixed fallback message instead.

use colored::Colorize;

use crate::api::ChatResponse;
use crate::error::ApiResult;

/// First assistant message of every transcript
pub const GREETING: &str =
    "Hi! I can answer questions about your content metrics. Ask me about views, engagement or sentiment.";

/// Shown in place of an answer when the backend could not be reached
pub const FALLBACK_UNAVAILABLE: &str =
    "The assistant is unavailable right now. Check that the backend is running and try again.";

/// Shown when the backend replied without an answer
pub const NO_ANSWER: &str = "No answer from the model.";

/// Author of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Ordered list of chat messages, starting with the greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user's question
    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: text.to_string(),
        });
    }

    /// Append the assistant turn produced by a chat request and return its text
    pub fn record_reply(&mut self, reply: ApiResult<ChatResponse>) -> &str {
        let text = reply_text(reply);
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text,
        });
        &self.messages[self.messages.len() - 1].text
    }

    /// Render every message
    pub fn render(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(&format!("{}\n", render_message(message)));
        }
        out
    }
}

/// Text of the assistant turn for a chat result
///
/// Any failure becomes [`FALLBACK_UNAVAILABLE`]; a blank or missing answer
/// becomes [`NO_ANSWER`].
pub fn reply_text(reply: ApiResult<ChatResponse>) -> String {
    match reply {
        Ok(response) => match response.answer {
            Some(answer) if !answer.trim().is_empty() => answer,
            _ => NO_ANSWER.to_string(),
        },
        Err(e) => {
            tracing::warn!("Chat request failed: {}", e);
            FALLBACK_UNAVAILABLE.to_string()
        }
    }
}

/// Render a single message with its speaker prefix
pub fn render_message(message: &ChatMessage) -> String {
    match message.role {
        ChatRole::User => format!("{} {}", "you>".cyan().bold(), message.text),
        ChatRole::Assistant => format!("{} {}", "assistant>".green().bold(), message.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::Assistant);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }

    #[test]
    fn test_transport_failure_uses_fallback() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("what is up?");
        let text = transcript
            .record_reply(Err(ApiError::Transport {
                message: "connection refused".into(),
            }))
            .to_string();
        assert_eq!(text, FALLBACK_UNAVAILABLE);
        assert_eq!(transcript.messages().len(), 3);
    }

    #[test]
    fn test_http_failure_uses_fallback() {
        let reply = Err(ApiError::Http {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(reply_text(reply), FALLBACK_UNAVAILABLE);
    }

    #[test]
    fn test_missing_or_blank_answer() {
        assert_eq!(reply_text(Ok(ChatResponse { answer: None })), NO_ANSWER);
        assert_eq!(
            reply_text(Ok(ChatResponse {
                answer: Some("  ".into())
            })),
            NO_ANSWER
        );
        assert_eq!(
            reply_text(Ok(ChatResponse {
                answer: Some("42".into())
            })),
            "42"
        );
    }

    #[test]
    fn test_render_includes_every_message() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("hello");
        transcript.record_reply(Ok(ChatResponse {
            answer: Some("hi there".into()),
        }));
        let rendered = transcript.render();
        assert!(rendered.contains("hello"));
        assert!(rendered.contains("hi there"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
