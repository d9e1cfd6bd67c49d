use super::*;

#[test]
fn from_config_uses_configured_endpoints() {
    let config = WidgetConfig { chat_endpoint: "/bot/chat".into(), ..WidgetConfig::default() };
    let backend = HttpChatBackend::from_config(&config);
    assert_eq!(backend.chat_endpoint(), "/bot/chat");
    assert_eq!(backend.clear_endpoint(), "/api/clear");
}

#[test]
fn decode_failed_message_names_endpoint_and_status() {
    let err = decode_failed("/api/chat", 502, "expected value at line 1 column 1");
    assert_eq!(
        err,
        WidgetError::Decode("/api/chat returned 502: expected value at line 1 column 1".into())
    );
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_backend_reports_unavailable() {
    let backend = HttpChatBackend::from_config(&WidgetConfig::default());
    let request = ChatRequest { message: "hi".into(), location: None };
    assert_eq!(backend.send_chat(&request).await, Err(WidgetError::Unavailable("fetch")));
    assert_eq!(backend.clear_conversation().await, Err(WidgetError::Unavailable("fetch")));
}
