use crate::http::request::Request;

#[derive(Debug)]
pub enum ParseError {
    InvalidEncoding,
    MissingMethod,
    MissingTarget,
    MissingProtocol,
}

/// Parses the request line out of one read's worth of bytes.
///
/// Only the first line is interpreted; header lines and anything after them
/// are ignored. The method and target are space-delimited tokens with
/// leading delimiter runs skipped; the protocol is the raw remainder of the
/// line after the target's single delimiting space, so any extra interior
/// padding survives into the protocol token.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;
    let line = request_line(text);

    let (method, rest) = take_token(line).ok_or(ParseError::MissingMethod)?;
    let (target, rest) = take_token(rest).ok_or(ParseError::MissingTarget)?;

    if rest.is_empty() {
        return Err(ParseError::MissingProtocol);
    }

    Ok(Request {
        method: method.to_string(),
        target: target.to_string(),
        version: rest.to_string(),
    })
}

fn request_line(text: &str) -> &str {
    match text.find(['\r', '\n']) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Skips leading spaces, then splits off one space-delimited token. The
/// remainder starts directly after the delimiting space, if there was one.
fn take_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start_matches(' ');
    if input.is_empty() {
        return None;
    }

    Some(input.split_once(' ').unwrap_or((input, "")))
}
