const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP status codes the server can emit.
///
/// The set is deliberately small:
/// - `Ok` (200): the resolved file was served
/// - `BadRequest` (400): malformed request line, or not a GET over HTTP/1.1
/// - `NotFound` (404): the resolved path does not exist
/// - `InternalServerError` (500): the file could not be opened after a
///   successful metadata query, or the socket read failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Status line and headers of a response, ready to be encoded.
///
/// The body is not part of this type: callers follow the encoded head with
/// either a canned error page or streamed file contents.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHead {
    /// The HTTP status code
    pub status: StatusCode,
    /// Byte length of the body that will follow
    pub content_length: u64,
    /// MIME type of the body
    pub content_type: &'static str,
}

impl ResponseHead {
    pub fn new(status: StatusCode, content_length: u64, content_type: &'static str) -> Self {
        Self {
            status,
            content_length,
            content_type,
        }
    }

    /// Encodes the status line and headers as a single buffer.
    ///
    /// Header lines end with a bare `\n` and the block is terminated by an
    /// empty line. Clients of this server depend on those exact bytes.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::{ResponseHead, StatusCode};
    /// let head = ResponseHead::new(StatusCode::Ok, 14, "text/html");
    /// assert_eq!(
    ///     head.encode(),
    ///     "HTTP/1.1 200 OK\nContent-Length: 14\nContent-Type: text/html\n\n"
    /// );
    /// ```
    pub fn encode(&self) -> String {
        format!(
            "{} {} {}\nContent-Length: {}\nContent-Type: {}\n\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.content_length,
            self.content_type
        )
    }
}
