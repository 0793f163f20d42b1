use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use url::form_urlencoded;

use crate::core::models::Message;
use crate::errors::RelayError;

const JSON_MEDIA_TYPE: &str = "application/json";
const PAYLOAD_FIELD: &str = "payload";

/// True when the request declares a JSON body. Parameters such as `charset` are ignored.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}

/// Looks up the first value of `key` in a URL-encoded form.
///
/// ```
/// use slack_chat_relay::api::parsing::form_value;
///
/// let form = b"token=abc&payload=%7B%22text%22%3A%22hi+there%22%7D";
/// assert_eq!(form_value(form, "payload").as_deref(), Some(r#"{"text":"hi there"}"#));
/// assert_eq!(form_value(form, "missing"), None);
/// ```
pub fn form_value(form: &[u8], key: &str) -> Option<String> {
    form_urlencoded::parse(form)
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Decodes a `Message` from JSON. A literal `null` is an empty message.
fn message_from_json(value: &[u8]) -> Result<Message, serde_json::Error> {
    serde_json::from_slice::<Option<Message>>(value).map(Option::unwrap_or_default)
}

/// Decodes a JSON body as a `Message`. Only the first JSON value is read.
///
/// # Errors
///
/// Returns `RelayError::JsonBodyError` when the body is empty or is neither
/// `null` nor a JSON object whose `text` is a string or `null`.
pub fn parse_json_message(body: &[u8]) -> Result<Message, RelayError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<Message>>()
        .next()
        .ok_or_else(|| RelayError::JsonBodyError("empty body".to_string()))?
        .map(Option::unwrap_or_default)
        .map_err(|e| RelayError::JsonBodyError(e.to_string()))
}

/// Decodes the JSON `payload` field of a form-encoded Slack webhook.
///
/// The form body is searched first, then the query string.
///
/// # Errors
///
/// Returns `RelayError::FormPayloadError` when the payload is missing or is
/// not a JSON `Message`.
pub fn parse_form_message(body: &[u8], query: Option<&str>) -> Result<Message, RelayError> {
    let payload = form_value(body, PAYLOAD_FIELD)
        .or_else(|| query.and_then(|q| form_value(q.as_bytes(), PAYLOAD_FIELD)))
        .unwrap_or_default();

    message_from_json(payload.as_bytes())
        .map_err(|e| RelayError::FormPayloadError(format!("Invalid JSON payload: {e}")))
}

/// Decodes an inbound Slack webhook body according to its content type.
///
/// # Errors
///
/// Returns the JSON or form decoding error for the detected body shape.
pub fn decode_message(
    headers: &HeaderMap,
    body: &[u8],
    query: Option<&str>,
) -> Result<Message, RelayError> {
    if is_json_content_type(headers) {
        parse_json_message(body)
    } else {
        parse_form_message(body, query)
    }
}
