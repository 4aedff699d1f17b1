//! Outgoing response value, its builder, and the [`IntoResponse`] conversion trait.
//!
//! A [`Response`] is a plain value: status code, header map, string body.
//! Putting it on the wire is the transport's job, not trailhead's.

use std::collections::HashMap;

use crate::status::Status;

// ── ContentType ───────────────────────────────────────────────────────────────

/// Common content-type values for use with [`ResponseBuilder::content_type`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentType {
    Html,         // text/html; charset=utf-8
    Json,         // application/json
    Text,         // text/plain; charset=utf-8
    Xml,          // application/xml
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Json => "application/json",
            Self::Text => "text/plain; charset=utf-8",
            Self::Xml  => "application/xml",
        }
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response. Immutable once built.
///
/// # Shortcuts
///
/// ```rust
/// use trailhead::{Response, Status};
///
/// Response::json(r#"{"id":1}"#);
/// Response::text("hello");
/// Response::status(Status::NoContent);
/// ```
///
/// # Builder
///
/// ```rust
/// use trailhead::{Response, ResponseBuilder, Status};
///
/// let res = ResponseBuilder::not_found()
///     .header("x-trace", "abc")
///     .body("no such user")
///     .build();
/// assert_eq!(res.status_code(), 404);
///
/// let created = Response::builder()
///     .status_code(Status::Created)
///     .header("location", "/users/42")
///     .build();
/// assert_eq!(created.header("location"), Some("/users/42"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    status_code: u16,
    headers: HashMap<String, String>,
    body: String,
}

impl Response {
    /// `200 OK` — `application/json`.
    pub fn json(body: impl Into<String>) -> Self {
        ResponseBuilder::ok().content_type(ContentType::Json).body(body).build()
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        ResponseBuilder::ok().content_type(ContentType::Text).body(body).build()
    }

    /// Response with no body and no headers.
    pub fn status(code: impl Into<u16>) -> Self {
        ResponseBuilder::builder().status_code(code).build()
    }

    /// Builder with the defaults: `200`, no headers, empty body.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::builder()
    }

    pub fn status_code(&self) -> u16 { self.status_code }
    pub fn headers(&self) -> &HashMap<String, String> { &self.headers }
    pub fn body(&self) -> &str { &self.body }

    /// Exact-key header lookup. Keys are stored as given.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Hands the parts to a transport that serialises them.
    pub fn into_parts(self) -> (u16, HashMap<String, String>, String) {
        (self.status_code, self.headers, self.body)
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Setters consume and return the builder so calls chain. [`build`](Self::build)
/// borrows and snapshots: every call produces an independent `Response`, and
/// anything set afterwards never leaks into earlier ones.
#[derive(Clone, Debug)]
pub struct ResponseBuilder {
    status_code: u16,
    headers: HashMap<String, String>,
    body: String,
}

impl ResponseBuilder {
    pub fn ok() -> Self {
        Self::builder().status_code(Status::Ok)
    }

    pub fn not_found() -> Self {
        Self::builder().status_code(Status::NotFound)
    }

    pub fn internal_server_error() -> Self {
        Self::builder().status_code(Status::InternalServerError)
    }

    pub fn builder() -> Self {
        Self { status_code: Status::Ok.into(), headers: HashMap::new(), body: String::new() }
    }

    /// Any `u16` is accepted as-is; there is no range check.
    pub fn status_code(mut self, code: impl Into<u16>) -> Self {
        self.status_code = code.into();
        self
    }

    /// Sets one header, replacing any earlier value for the same key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Merges a whole mapping. Overlapping keys take the new value.
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn content_type(self, content_type: ContentType) -> Self {
        self.header("content-type", content_type.as_str())
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(&self) -> Response {
        Response {
            status_code: self.status_code,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self { Self::builder() }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into a [`Response`].
///
/// Implement on your own types to return them directly from handlers.
///
/// ```rust
/// use trailhead::{IntoResponse, Response, ResponseBuilder};
///
/// struct Greeting(&'static str);
///
/// impl IntoResponse for Greeting {
///     fn into_response(self) -> Response {
///         ResponseBuilder::ok().body(format!("hello, {}", self.0)).build()
///     }
/// }
///
/// assert_eq!(Greeting("alice").into_response().body(), "hello, alice");
/// ```
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for ResponseBuilder {
    fn into_response(self) -> Response { self.build() }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`Status`] directly from a handler: `return Status::NoContent`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}
