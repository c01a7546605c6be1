/// A parsed HTTP request line.
///
/// Only the request line is represented. Header lines and request bodies
/// are not part of the protocol subset this server speaks, so nothing else
/// survives parsing.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method token (e.g., "GET")
    pub method: String,
    /// The request target (e.g., "/index.html")
    pub target: String,
    /// HTTP version token (e.g., "HTTP/1.1")
    pub version: String,
}

impl Request {
    /// Checks whether this is a request the server agrees to handle.
    ///
    /// Only `GET` over `HTTP/1.1` is served; everything else is answered
    /// with 400 Bad Request. Both comparisons are exact, so a lowercase
    /// method or a padded version token is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Request;
    /// let req = Request {
    ///     method: "GET".to_string(),
    ///     target: "/".to_string(),
    ///     version: "HTTP/1.1".to_string(),
    /// };
    /// assert!(req.is_supported());
    /// ```
    pub fn is_supported(&self) -> bool {
        self.method == "GET" && self.version == "HTTP/1.1"
    }
}
