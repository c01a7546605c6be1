use staticd::http::response::{ResponseHead, StatusCode};
use staticd::http::writer::{send_error, send_file};

#[test]
fn test_send_error_bad_request_exact_bytes() {
    let mut sink = Vec::new();
    send_error(&mut sink, StatusCode::BadRequest).unwrap();

    assert_eq!(
        sink,
        &b"HTTP/1.1 400 Bad Request\nContent-Length: 24\nContent-Type: text/html\n\n<h1>400 Bad Request</h1>"[..]
    );
}

#[test]
fn test_send_error_not_found_exact_bytes() {
    let mut sink = Vec::new();
    send_error(&mut sink, StatusCode::NotFound).unwrap();

    assert_eq!(
        sink,
        &b"HTTP/1.1 404 Not Found\nContent-Length: 22\nContent-Type: text/html\n\n<h1>404 Not Found</h1>"[..]
    );
}

#[test]
fn test_send_error_internal_error_exact_bytes() {
    let mut sink = Vec::new();
    send_error(&mut sink, StatusCode::InternalServerError).unwrap();

    assert_eq!(
        sink,
        &b"HTTP/1.1 500 Internal Server Error\nContent-Length: 34\nContent-Type: text/html\n\n<h1>500 Internal Server Error</h1>"[..]
    );
}

#[test]
fn test_send_file_writes_head_then_body() {
    let body = b"hello world";
    let head = ResponseHead::new(StatusCode::Ok, body.len() as u64, "text/plain");

    let mut source = &body[..];
    let mut sink = Vec::new();
    send_file(&mut source, &mut sink, &head).unwrap();

    assert_eq!(
        sink,
        &b"HTTP/1.1 200 OK\nContent-Length: 11\nContent-Type: text/plain\n\nhello world"[..]
    );
}

#[test]
fn test_send_file_streams_bodies_larger_than_one_chunk() {
    let body: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
    let head = ResponseHead::new(StatusCode::Ok, body.len() as u64, "text/plain");

    let mut source = &body[..];
    let mut sink = Vec::new();
    send_file(&mut source, &mut sink, &head).unwrap();

    let header_end = sink.windows(2).position(|w| w == b"\n\n").unwrap() + 2;
    assert_eq!(&sink[header_end..], &body[..]);
}

#[test]
fn test_send_file_with_empty_source() {
    let head = ResponseHead::new(StatusCode::Ok, 0, "text/plain");

    let mut source = &b""[..];
    let mut sink = Vec::new();
    send_file(&mut source, &mut sink, &head).unwrap();

    assert_eq!(
        sink,
        &b"HTTP/1.1 200 OK\nContent-Length: 0\nContent-Type: text/plain\n\n"[..]
    );
}
