//! Tests for the JSON shapes sent to and read from the backend.

use ncore::{Message, Role};
use nova_protocol::{
    ChatRequest, ChatResponse, ErrorBody, MessageRequest, MessageResponse, SessionResponse,
    UploadResponse, api,
};
use serde_json::json;

#[test]
fn chat_request_uses_gemini_history() {
    let history = [Message::user("hi"), Message::assistant("hello")];
    let request = ChatRequest::new("how are you?", &history);

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "message": "how are you?",
            "history": [
                {"role": "user", "parts": ["hi"]},
                {"role": "model", "parts": ["hello"]},
            ]
        })
    );
}

#[test]
fn chat_request_with_empty_history() {
    let request = ChatRequest::new("first", &[]);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"message": "first", "history": []})
    );
}

#[test]
fn message_request_shape() {
    let request = MessageRequest {
        session_id: "s-1".to_owned(),
        message: "Perform Gap Analysis".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"session_id": "s-1", "message": "Perform Gap Analysis"})
    );
}

#[test]
fn chat_response_error_only() {
    let resp: ChatResponse = serde_json::from_str(r#"{"error":"quota exceeded"}"#).unwrap();
    assert!(resp.response.is_none());
    assert_eq!(resp.error.as_deref(), Some("quota exceeded"));
}

#[test]
fn upload_response_with_content() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"content":"text","filename":"cv.pdf"}"#).unwrap();
    assert_eq!(resp.content.as_deref(), Some("text"));
    assert_eq!(resp.filename.as_deref(), Some("cv.pdf"));
    assert!(resp.error.is_none());
}

#[test]
fn session_response_without_suggestions() {
    let resp: SessionResponse = serde_json::from_value(json!({
        "session_id": "abc",
        "conversation_history": [
            {"role": "assistant", "content": "Welcome!", "timestamp": "2025-01-01T10:00:00"}
        ],
        "message": "Session created successfully"
    }))
    .unwrap();

    assert_eq!(resp.session_id, "abc");
    assert!(resp.suggestions.is_empty());
    let history: Vec<Message> = resp.conversation_history.into_iter().map(Into::into).collect();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role, Role::Assistant);
    assert_eq!(history[0].content, "Welcome!");
}

#[test]
fn message_response_confidence_optional() {
    let resp: MessageResponse = serde_json::from_value(json!({
        "answer": "Here is your gap analysis.",
        "suggestions": ["Rewrite this section"],
        "session_valid": true,
        "conversation_history": []
    }))
    .unwrap();
    assert!(resp.confidence.is_none());
    assert_eq!(resp.suggestions, ["Rewrite this section"]);
}

#[test]
fn error_body_prefers_error_over_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Session not found"}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Session not found"));

    let body: ErrorBody = serde_json::from_str(r#"{"error":"a","detail":"b"}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("a"));

    assert!(ErrorBody::default().message().is_none());
}

#[test]
fn session_paths() {
    assert_eq!(api::history("abc"), "/chatbot/history/abc");
    assert_eq!(api::session("abc"), "/chatbot/session/abc");
    assert_eq!(api::session_info("abc"), "/chatbot/session/abc/info");
}
