use super::*;

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_with_location_serializes_coordinates() {
    let req = ChatRequest {
        message: "nearest outlet?".to_owned(),
        location: Some(Coordinates { latitude: 3.139, longitude: 101.6869 }),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "message": "nearest outlet?",
            "location": { "latitude": 3.139, "longitude": 101.6869 }
        })
    );
}

#[test]
fn chat_request_without_location_serializes_null() {
    let req = ChatRequest { message: "hi".to_owned(), location: None };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "message": "hi", "location": null }));
}

// =============================================================
// ChatReply
// =============================================================

#[test]
fn chat_reply_success_ignores_bookkeeping_fields() {
    let reply: ChatReply = serde_json::from_str(
        r#"{"success": true, "message": "Hello!", "session_id": "s-1", "requires_input": null}"#,
    )
    .unwrap();
    assert!(reply.success);
    assert_eq!(reply.message.as_deref(), Some("Hello!"));
}

#[test]
fn chat_reply_failure_carries_error_detail() {
    let reply: ChatReply =
        serde_json::from_str(r#"{"success": false, "error": "Sorry, something went wrong. Please try again."}"#)
            .unwrap();
    assert!(!reply.success);
    assert!(reply.error.is_some());
}

#[test]
fn chat_reply_success_without_message_has_no_text() {
    let reply: ChatReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(reply.success);
    assert_eq!(reply.message, None);
}

#[test]
fn chat_reply_bare_error_body_decodes_as_failure() {
    let reply: ChatReply = serde_json::from_str(r#"{"error": "Internal server error"}"#).unwrap();
    assert!(!reply.success);
    assert_eq!(reply.error.as_deref(), Some("Internal server error"));
}

// =============================================================
// ClearReply
// =============================================================

#[test]
fn clear_reply_decodes_success() {
    let reply: ClearReply =
        serde_json::from_str(r#"{"success": true, "message": "Conversation cleared", "session_id": "s-2"}"#)
            .unwrap();
    assert!(reply.success);
}

#[test]
fn clear_reply_decodes_failure() {
    let reply: ClearReply =
        serde_json::from_str(r#"{"success": false, "error": "Could not clear conversation"}"#).unwrap();
    assert!(!reply.success);
}

#[test]
fn clear_reply_bare_error_body_decodes_as_failure() {
    let reply: ClearReply = serde_json::from_str(r#"{"error": "Not found"}"#).unwrap();
    assert!(!reply.success);
    assert_eq!(reply.error.as_deref(), Some("Not found"));
}
