use std::fs::File;
use std::io::Read;
use std::net::{SocketAddr, TcpStream};

use tracing::{debug, warn};

use crate::files::resolver::FileResolver;
use crate::http::BUFFER_SIZE;
use crate::http::parser::parse_request;
use crate::http::response::{ResponseHead, StatusCode};
use crate::http::writer;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
}

pub enum ConnectionState {
    Open,
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        Self { stream, peer }
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Services one readiness event and reports whether the reactor should
    /// keep the connection registered.
    pub fn service(&mut self, resolver: &FileResolver) -> ConnectionState {
        let mut buffer = [0u8; BUFFER_SIZE];

        match self.stream.read(&mut buffer) {
            Ok(0) => {
                debug!(peer = %self.peer, "peer closed connection");
                ConnectionState::Closed
            }
            Ok(n) => {
                self.handle(&buffer[..n], resolver);
                ConnectionState::Open
            }
            Err(e) => {
                warn!(peer = %self.peer, error = %e, "read failed");
                self.send_error(StatusCode::InternalServerError);
                ConnectionState::Closed
            }
        }
    }

    fn handle(&mut self, buffer: &[u8], resolver: &FileResolver) {
        let request = match parse_request(buffer) {
            Ok(request) => request,
            Err(e) => {
                debug!(peer = %self.peer, error = ?e, "malformed request");
                self.send_error(StatusCode::BadRequest);
                return;
            }
        };

        if !request.is_supported() {
            debug!(
                peer = %self.peer,
                method = %request.method,
                version = %request.version,
                "unsupported request"
            );
            self.send_error(StatusCode::BadRequest);
            return;
        }

        let file = match resolver.resolve(&request.target) {
            Ok(file) => file,
            Err(_) => {
                debug!(peer = %self.peer, target = %request.target, "not found");
                self.send_error(StatusCode::NotFound);
                return;
            }
        };

        // The file can vanish or change permissions between the metadata
        // query and the open.
        let mut source = match File::open(&file.path) {
            Ok(source) => source,
            Err(e) => {
                warn!(
                    peer = %self.peer,
                    path = %file.path.display(),
                    error = %e,
                    "open failed"
                );
                self.send_error(StatusCode::InternalServerError);
                return;
            }
        };

        let head = ResponseHead::new(StatusCode::Ok, file.len, file.content_type);
        match writer::send_file(&mut source, &mut self.stream, &head) {
            Ok(()) => debug!(
                peer = %self.peer,
                target = %request.target,
                bytes = file.len,
                "served"
            ),
            Err(e) => warn!(peer = %self.peer, error = %e, "write failed"),
        }
    }

    fn send_error(&mut self, status: StatusCode) {
        if let Err(e) = writer::send_error(&mut self.stream, status) {
            warn!(peer = %self.peer, error = %e, "write failed");
        }
    }
}
