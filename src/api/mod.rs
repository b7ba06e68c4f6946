//! REST client for the contact and suggestion backend.
//!
//! The library never performs I/O. [`ApiClient`] turns operations into
//! [`ApiRequest`] values, the plugin shim hands them to Zellij's
//! `web_request`, and the host's answer comes back as an [`ApiReply`] that the
//! `decode_*` functions reduce to a typed value or a [`SubmissionError`].
//!
//! # Endpoints
//!
//! | Operation                  | Method | Path                   |
//! |----------------------------|--------|------------------------|
//! | submit contact message     | POST   | `/contact`             |
//! | list contact messages      | GET    | `/contact`             |
//! | update contact status      | PUT    | `/contact/{id}/status` |
//! | submit cuisine suggestion  | POST   | `/suggestions`         |
//! | list cuisine suggestions   | GET    | `/suggestions`         |
//!
//! Every body is wrapped in the backend envelope
//! `{ success, message?, data?, error? }`.
//!
//! # Failure Messages
//!
//! A failed reply yields one user-facing message: the envelope's `message`
//! if present, else its `error`, else a per-operation fallback. The client
//! does no validation and never retries.
//!
//! # Example
//!
//! ```rust
//! use world_cuisines::api::{ApiClient, HttpMethod, RequestKind};
//!
//! let client = ApiClient::new("http://localhost:5000/api/");
//! let request = client.list_contacts();
//! assert_eq!(request.method, HttpMethod::Get);
//! assert_eq!(request.url, "http://localhost:5000/api/contact");
//! assert_eq!(request.kind(), Some(RequestKind::ListContacts));
//! ```

use crate::domain::{
    ContactMessage, ContactPayload, ContactStatus, CuisineSuggestion, StatusUpdate, SubmissionError,
    SuggestionPayload,
};
use crate::observability::TraceContext;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::cell::Cell;
use std::collections::BTreeMap;

/// Fallback shown when a contact submission fails without a backend message.
pub const CONTACT_FAILED: &str = "Failed to submit form. Please try again.";
/// Fallback shown when a suggestion submission fails without a backend message.
pub const SUGGESTION_FAILED: &str = "Failed to submit suggestion. Please try again.";
/// Fallback shown when loading the review feed fails.
pub const FEED_FAILED: &str = "Failed to load reviews. Please try again later.";
/// Fallback shown when a status update fails.
pub const STATUS_FAILED: &str = "Failed to update status. Please try again.";

/// Context key holding the [`RequestKind`].
pub const CONTEXT_KIND: &str = "kind";
/// Context key holding the feed generation a list request belongs to.
pub const CONTEXT_GENERATION: &str = "generation";
/// Context key holding the per-client request sequence number.
pub const CONTEXT_REQUEST_ID: &str = "request_id";
const CONTEXT_TRACE_ID: &str = "trace_id";
const CONTEXT_PARENT_SPAN_ID: &str = "parent_span_id";

/// HTTP verbs used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// Which operation a request performs. Travels in the request context so the
/// reply can be routed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    SubmitContact,
    SubmitSuggestion,
    ListContacts,
    ListSuggestions,
    UpdateContactStatus,
}

impl RequestKind {
    /// Stable context value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubmitContact => "submit_contact",
            Self::SubmitSuggestion => "submit_suggestion",
            Self::ListContacts => "list_contacts",
            Self::ListSuggestions => "list_suggestions",
            Self::UpdateContactStatus => "update_contact_status",
        }
    }

    /// Parses a context value produced by [`as_str`](Self::as_str).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "submit_contact" => Some(Self::SubmitContact),
            "submit_suggestion" => Some(Self::SubmitSuggestion),
            "list_contacts" => Some(Self::ListContacts),
            "list_suggestions" => Some(Self::ListSuggestions),
            "update_contact_status" => Some(Self::UpdateContactStatus),
            _ => None,
        }
    }
}

/// A request ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body; empty for GET.
    pub body: Vec<u8>,
    /// Opaque key/value pairs echoed back with the reply.
    pub context: BTreeMap<String, String>,
}

impl ApiRequest {
    fn new(method: HttpMethod, url: String, body: Vec<u8>, kind: RequestKind) -> Self {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KIND.to_string(), kind.as_str().to_string());
        if let Some(trace) = TraceContext::from_current() {
            context.insert(CONTEXT_TRACE_ID.to_string(), trace.trace_id);
            context.insert(CONTEXT_PARENT_SPAN_ID.to_string(), trace.parent_span_id);
        }
        Self {
            method,
            url,
            body,
            context,
        }
    }

    /// Adds a context entry.
    #[must_use]
    pub fn with_context(mut self, key: &str, value: impl Into<String>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    /// The operation this request performs.
    #[must_use]
    pub fn kind(&self) -> Option<RequestKind> {
        self.context.get(CONTEXT_KIND).and_then(|k| RequestKind::parse(k))
    }
}

/// The host's answer to an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Vec<u8>,
    pub context: BTreeMap<String, String>,
}

impl ApiReply {
    /// The operation the originating request performed.
    #[must_use]
    pub fn kind(&self) -> Option<RequestKind> {
        self.context.get(CONTEXT_KIND).and_then(|k| RequestKind::parse(k))
    }

    /// Feed generation echoed from the request, if any.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        self.context.get(CONTEXT_GENERATION).and_then(|g| g.parse().ok())
    }

    /// Sequence number of the originating request.
    #[must_use]
    pub fn request_id(&self) -> Option<u64> {
        self.context.get(CONTEXT_REQUEST_ID).and_then(|id| id.parse().ok())
    }

    /// Trace context captured when the request was built.
    #[must_use]
    pub fn trace_context(&self) -> Option<TraceContext> {
        Some(TraceContext {
            trace_id: self.context.get(CONTEXT_TRACE_ID)?.clone(),
            parent_span_id: self.context.get(CONTEXT_PARENT_SPAN_ID)?.clone(),
        })
    }

    const fn is_success_status(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Builds requests against a configured base address.
///
/// Every request is numbered so replies can be correlated in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    issued: Cell<u64>,
}

impl ApiClient {
    /// Creates a client. A trailing `/` on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            issued: Cell::new(0),
        }
    }

    /// Base address without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: HttpMethod, path: &str, body: Vec<u8>, kind: RequestKind) -> ApiRequest {
        let id = self.issued.get() + 1;
        self.issued.set(id);
        ApiRequest::new(method, format!("{}{path}", self.base_url), body, kind)
            .with_context(CONTEXT_REQUEST_ID, id.to_string())
    }

    /// `POST /contact`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be encoded.
    pub fn submit_contact(&self, payload: &ContactPayload) -> serde_json::Result<ApiRequest> {
        Ok(self.request(HttpMethod::Post, "/contact", encode(payload)?, RequestKind::SubmitContact))
    }

    /// `POST /suggestions`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be encoded.
    pub fn submit_suggestion(&self, payload: &SuggestionPayload) -> serde_json::Result<ApiRequest> {
        Ok(self.request(
            HttpMethod::Post,
            "/suggestions",
            encode(payload)?,
            RequestKind::SubmitSuggestion,
        ))
    }

    /// `GET /contact`.
    #[must_use]
    pub fn list_contacts(&self) -> ApiRequest {
        self.request(HttpMethod::Get, "/contact", Vec::new(), RequestKind::ListContacts)
    }

    /// `GET /suggestions`.
    #[must_use]
    pub fn list_suggestions(&self) -> ApiRequest {
        self.request(HttpMethod::Get, "/suggestions", Vec::new(), RequestKind::ListSuggestions)
    }

    /// `PUT /contact/{id}/status`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body cannot be encoded.
    pub fn update_contact_status(&self, id: &str, status: ContactStatus) -> serde_json::Result<ApiRequest> {
        Ok(self.request(
            HttpMethod::Put,
            &format!("/contact/{id}/status"),
            encode(&StatusUpdate { status })?,
            RequestKind::UpdateContactStatus,
        ))
    }
}

fn encode<T: Serialize>(body: &T) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(body)
}

/// Decodes the reply to [`ApiClient::submit_contact`].
///
/// # Errors
///
/// Returns a [`SubmissionError`] carrying the backend message or
/// [`CONTACT_FAILED`].
pub fn decode_contact(reply: &ApiReply) -> Result<ContactMessage, SubmissionError> {
    decode_envelope(reply, CONTACT_FAILED)
}

/// Decodes the reply to [`ApiClient::submit_suggestion`].
///
/// # Errors
///
/// Returns a [`SubmissionError`] carrying the backend message or
/// [`SUGGESTION_FAILED`].
pub fn decode_suggestion(reply: &ApiReply) -> Result<CuisineSuggestion, SubmissionError> {
    decode_envelope(reply, SUGGESTION_FAILED)
}

/// Decodes the reply to [`ApiClient::list_contacts`].
///
/// # Errors
///
/// Returns a [`SubmissionError`] carrying the backend message or
/// [`FEED_FAILED`].
pub fn decode_contacts(reply: &ApiReply) -> Result<Vec<ContactMessage>, SubmissionError> {
    decode_envelope(reply, FEED_FAILED)
}

/// Decodes the reply to [`ApiClient::list_suggestions`].
///
/// # Errors
///
/// Returns a [`SubmissionError`] carrying the backend message or
/// [`FEED_FAILED`].
pub fn decode_suggestions(reply: &ApiReply) -> Result<Vec<CuisineSuggestion>, SubmissionError> {
    decode_envelope(reply, FEED_FAILED)
}

/// Decodes the reply to [`ApiClient::update_contact_status`].
///
/// # Errors
///
/// Returns a [`SubmissionError`] carrying the backend message (for example
/// "Contact message not found") or [`STATUS_FAILED`].
pub fn decode_status_update(reply: &ApiReply) -> Result<ContactMessage, SubmissionError> {
    decode_envelope(reply, STATUS_FAILED)
}

/// Unwraps `{ success, message?, data?, error? }` into `data`.
///
/// A reply succeeds only with a 2xx status, `success` not `false`, and a
/// `data` member that deserializes as `T`.
fn decode_envelope<T: DeserializeOwned>(reply: &ApiReply, fallback: &str) -> Result<T, SubmissionError> {
    let status = Some(reply.status);
    let envelope: Option<JsonValue> = serde_json::from_slice(&reply.body).ok();

    let backend_message = envelope.as_ref().and_then(|body| {
        ["message", "error"]
            .iter()
            .find_map(|key| {
                body.get(*key)
                    .and_then(JsonValue::as_str)
                    .filter(|m| !m.trim().is_empty())
            })
            .map(str::to_string)
    });
    let failure = |message: Option<String>| {
        let message = message.unwrap_or_else(|| fallback.to_string());
        tracing::debug!(status = reply.status, message = %message, "api request failed");
        SubmissionError::new(status, message)
    };

    let declared_success = envelope
        .as_ref()
        .and_then(|body| body.get("success"))
        .and_then(JsonValue::as_bool)
        .unwrap_or(true);

    if !reply.is_success_status() || !declared_success {
        return Err(failure(backend_message));
    }

    let data = envelope
        .and_then(|mut body| body.get_mut("data").map(JsonValue::take))
        .filter(|data| !data.is_null())
        .ok_or_else(|| failure(None))?;

    serde_json::from_value(data).map_err(|e| {
        tracing::debug!(error = %e, "unexpected reply shape");
        failure(None)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> ApiReply {
        ApiReply {
            status,
            body: body.as_bytes().to_vec(),
            context: BTreeMap::new(),
        }
    }

    const CONTACT: &str = r#"{
        "_id": "65f0c0ffee",
        "name": "Ada",
        "email": "ada@example.com",
        "subject": "Hello",
        "message": "Add Georgian food",
        "createdAt": "2024-03-01T10:00:00.000Z",
        "status": "new"
    }"#;

    #[test]
    fn created_contact_is_decoded() {
        let body = format!(r#"{{"success": true, "message": "Message sent", "data": {CONTACT}}}"#);
        let contact = decode_contact(&reply(201, &body)).unwrap();

        assert_eq!(contact.id, "65f0c0ffee");
        assert_eq!(contact.status, ContactStatus::New);
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn backend_message_wins_over_fallback() {
        let body = r#"{"success": false, "message": "Email is invalid", "error": "ValidationError"}"#;
        let err = decode_contact(&reply(400, body)).unwrap_err();

        assert_eq!(err.status, Some(400));
        assert_eq!(err.message, "Email is invalid");
    }

    #[test]
    fn error_member_is_used_without_message() {
        let body = r#"{"success": false, "error": "Database unavailable"}"#;
        let err = decode_suggestion(&reply(500, body)).unwrap_err();
        assert_eq!(err.message, "Database unavailable");
    }

    #[test]
    fn unreadable_body_falls_back() {
        let err = decode_suggestion(&reply(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(err.message, SUGGESTION_FAILED);

        let err = decode_contacts(&reply(0, "")).unwrap_err();
        assert_eq!(err.message, FEED_FAILED);
    }

    #[test]
    fn declared_failure_with_ok_status_is_an_error() {
        let err = decode_contacts(&reply(200, r#"{"success": false}"#)).unwrap_err();
        assert_eq!(err.message, FEED_FAILED);
    }

    #[test]
    fn contact_list_is_decoded() {
        let body = format!(r#"{{"success": true, "data": [{CONTACT}, {CONTACT}]}}"#);
        assert_eq!(decode_contacts(&reply(200, &body)).unwrap().len(), 2);
    }

    #[test]
    fn unknown_contact_reports_not_found() {
        let body = r#"{"success": false, "message": "Contact message not found"}"#;
        let err = decode_status_update(&reply(404, body)).unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "Contact message not found");
    }

    #[test]
    fn requests_target_expected_endpoints() {
        let client = ApiClient::new("https://cuisines.example/api//");
        assert_eq!(client.base_url(), "https://cuisines.example/api");

        let put = client
            .update_contact_status("abc123", ContactStatus::Responded)
            .unwrap();
        assert_eq!(put.method, HttpMethod::Put);
        assert_eq!(put.url, "https://cuisines.example/api/contact/abc123/status");
        assert_eq!(put.body, br#"{"status":"responded"}"#.to_vec());
        assert_eq!(put.kind(), Some(RequestKind::UpdateContactStatus));

        let list = client.list_suggestions().with_context(CONTEXT_GENERATION, "4");
        assert!(list.body.is_empty());
        let echoed = ApiReply {
            status: 200,
            body: vec![],
            context: list.context.clone(),
        };
        assert_eq!(echoed.generation(), Some(4));
        assert_eq!(echoed.kind(), Some(RequestKind::ListSuggestions));
        assert_eq!(echoed.request_id(), Some(2));
    }

    #[test]
    fn contact_payload_omits_blank_phone() {
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), "Ada".to_string());
        values.insert("phone".to_string(), String::new());

        let request = ApiClient::new("/api")
            .submit_contact(&ContactPayload::from_values(&values))
            .unwrap();
        let body: JsonValue = serde_json::from_slice(&request.body).unwrap();

        assert_eq!(request.url, "/api/contact");
        assert_eq!(body["name"], "Ada");
        assert!(body.get("phone").is_none());
    }
}
