//! HTTP protocol implementation.
//!
//! This module implements the GET-only HTTP/1.1 subset the server speaks,
//! one request per readiness event.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Services one readable socket: read, parse, respond
//! - **`parser`**: Parses a request line from a raw byte buffer
//! - **`request`**: The parsed request line and the method/version gate
//! - **`response`**: Status codes and response head encoding
//! - **`writer`**: Writes canned error pages and streamed file bodies
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Request Lifecycle
//!
//! Each readiness event on a connection walks one request through:
//!
//! ```text
//!        ┌─────────────┐
//!        │    Read     │ ← One fixed-size read from the socket
//!        └──────┬──────┘
//!               │ 0 bytes → connection closed
//!               ▼
//!        ┌──────────────────┐
//!        │     Parse        │ ← Request line only; bad line → 400
//!        └──────┬───────────┘
//!               │ GET + HTTP/1.1
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolve       │ ← Root + target; missing file → 404
//!        └──────┬───────────┘
//!               │ Metadata + open
//!               ▼
//!        ┌──────────────────┐
//!        │    Respond       │ ← Head, then the file in chunks
//!        └──────────────────┘
//! ```
//!
//! The connection stays registered afterwards, so a peer can send further
//! requests on the same socket, one per readiness event.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

/// Size of the socket read buffer and of file streaming chunks.
pub const BUFFER_SIZE: usize = 2048;
