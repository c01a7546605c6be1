use std::io::{self, Read, Write};

use crate::http::BUFFER_SIZE;
use crate::http::response::{ResponseHead, StatusCode};

/// Writes a canned error page for the given status.
pub fn send_error<W: Write>(sink: &mut W, status: StatusCode) -> io::Result<()> {
    let body: &[u8] = match status {
        StatusCode::NotFound => b"<h1>404 Not Found</h1>",
        StatusCode::InternalServerError => b"<h1>500 Internal Server Error</h1>",
        _ => b"<h1>400 Bad Request</h1>",
    };

    let head = ResponseHead::new(status, body.len() as u64, "text/html");
    sink.write_all(head.encode().as_bytes())?;
    sink.write_all(body)
}

/// Writes the response head, then streams the source to the sink in
/// fixed-size chunks until it is exhausted.
pub fn send_file<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    head: &ResponseHead,
) -> io::Result<()> {
    sink.write_all(head.encode().as_bytes())?;

    let mut chunk = [0u8; BUFFER_SIZE];
    loop {
        match source.read(&mut chunk) {
            Ok(0) => return Ok(()),
            Ok(n) => sink.write_all(&chunk[..n])?,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
