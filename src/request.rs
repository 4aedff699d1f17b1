//! Incoming HTTP request descriptor.

use std::collections::HashMap;

/// An incoming request, as produced by the transport layer.
///
/// The router only reads it. `url` is the raw request target and may carry a
/// `?query` and a `#fragment`; `method` is compared exactly, so the transport
/// should hand it over in the same case routes were registered with.
///
/// ```rust
/// use trailhead::Request;
///
/// let req = Request::new("GET", "/users/42?expand=true")
///     .with_header("accept", "application/json");
/// assert_eq!(req.path(), "/users/42");
/// assert_eq!(req.header("Accept"), Some("application/json"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    url: String,
    method: String,
    headers: Option<HashMap<String, String>>,
    body: Option<String>,
}

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url: url.into(), method: method.into(), headers: None, body: None }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn url(&self) -> &str { &self.url }
    pub fn method(&self) -> &str { &self.method }
    pub fn headers(&self) -> Option<&HashMap<String, String>> { self.headers.as_ref() }
    pub fn body(&self) -> Option<&str> { self.body.as_deref() }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref()?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The path portion of the url: fragment dropped first, then the query.
    pub fn path(&self) -> &str {
        let url = self.url.split('#').next().unwrap_or_default();
        url.split('?').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_strips_query_and_fragment() {
        assert_eq!(Request::new("GET", "/foo").path(), "/foo");
        assert_eq!(Request::new("GET", "/foo?bar").path(), "/foo");
        assert_eq!(Request::new("GET", "/foo#baz").path(), "/foo");
        assert_eq!(Request::new("GET", "/foo?bar#baz").path(), "/foo");
        assert_eq!(Request::new("GET", "/foo#baz?bar").path(), "/foo");
        assert_eq!(Request::new("GET", "?only=query").path(), "");
    }

    #[test]
    fn headers_and_body_are_optional() {
        let req = Request::new("POST", "/users");
        assert!(req.headers().is_none());
        assert!(req.body().is_none());
        assert_eq!(req.header("content-type"), None);

        let req = req.with_header("Content-Type", "text/plain").with_body("alice");
        assert_eq!(req.header("content-type"), Some("text/plain"));
        assert_eq!(req.body(), Some("alice"));
        assert_eq!(req.method(), "POST");
        assert_eq!(req.url(), "/users");
    }
}
