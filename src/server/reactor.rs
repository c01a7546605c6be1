use std::collections::HashMap;
use std::io;
use std::net::{SocketAddr, TcpListener};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};

use anyhow::Context;
use epoll::{ControlOptions::*, Event, Events};
use tracing::{debug, warn};

use crate::config::Config;
use crate::files::resolver::FileResolver;
use crate::http::connection::{Connection, ConnectionState};

/// Upper bound on readiness events drained per wait call.
const MAX_EVENTS: usize = 100;

/// Single-threaded readiness reactor.
///
/// Owns the listening socket, the epoll instance, and the table of live
/// connections, keyed by file descriptor. Nothing else touches the table,
/// so no locking is involved anywhere.
pub struct Server {
    listener: TcpListener,
    epoll: OwnedFd,
    connections: HashMap<RawFd, Connection>,
    resolver: FileResolver,
}

impl Server {
    /// Binds the listener and registers it with a fresh epoll instance.
    ///
    /// The listener is non-blocking so a spurious readiness report cannot
    /// stall the loop inside accept.
    pub fn bind(config: &Config) -> anyhow::Result<Self> {
        let addr = config.address();
        let listener =
            TcpListener::bind(&addr).with_context(|| format!("failed to bind {addr}"))?;
        listener
            .set_nonblocking(true)
            .context("failed to set listener non-blocking")?;

        let epoll = epoll::create(false).context("failed to create epoll instance")?;
        // SAFETY: epoll::create returned a newly opened descriptor that
        // nothing else owns.
        let epoll = unsafe { OwnedFd::from_raw_fd(epoll) };

        let event = Event::new(Events::EPOLLIN, listener.as_raw_fd() as u64);
        epoll::ctl(epoll.as_raw_fd(), EPOLL_CTL_ADD, listener.as_raw_fd(), event)
            .context("failed to register listener")?;

        Ok(Self {
            listener,
            epoll,
            connections: HashMap::new(),
            resolver: FileResolver::new(&config.root),
        })
    }

    /// The address the listener actually bound. With port 0 this is where
    /// the ephemeral port shows up.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the event loop. Does not return under normal operation; an
    /// error means the multiplexer itself failed.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut events = [Event::new(Events::empty(), 0); MAX_EVENTS];
            let ready = epoll::wait(self.epoll.as_raw_fd(), -1, &mut events)
                .context("epoll wait failed")?;

            for event in &events[..ready] {
                let fd = event.data as RawFd;

                if fd == self.listener.as_raw_fd() {
                    self.accept();
                } else {
                    self.service(fd);
                }
            }
        }
    }

    /// Accepts one pending connection per readiness event. Further pending
    /// connections are re-reported by the next wait call.
    fn accept(&mut self) {
        let (stream, peer) = match self.listener.accept() {
            Ok(accepted) => accepted,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => return,
            Err(e) => {
                warn!(error = %e, "accept failed");
                return;
            }
        };

        let fd = stream.as_raw_fd();
        let event = Event::new(Events::EPOLLIN, fd as u64);
        if let Err(e) = epoll::ctl(self.epoll.as_raw_fd(), EPOLL_CTL_ADD, fd, event) {
            // The stream drops here, closing the unserved connection.
            warn!(peer = %peer, error = %e, "failed to register connection");
            return;
        }

        debug!(peer = %peer, "accepted connection");
        self.connections.insert(fd, Connection::new(stream, peer));
    }

    fn service(&mut self, fd: RawFd) {
        let connection = match self.connections.get_mut(&fd) {
            Some(connection) => connection,
            // Stale entry: torn down earlier in this batch.
            None => return,
        };

        if let ConnectionState::Closed = connection.service(&self.resolver) {
            self.close(fd);
        }
    }

    fn close(&mut self, fd: RawFd) {
        if let Err(e) = epoll::ctl(
            self.epoll.as_raw_fd(),
            EPOLL_CTL_DEL,
            fd,
            Event::new(Events::empty(), 0),
        ) {
            warn!(error = %e, "failed to deregister connection");
        }

        // Dropping the removed connection closes its socket.
        if let Some(connection) = self.connections.remove(&fd) {
            debug!(peer = %connection.peer(), "closed connection");
        }
    }
}
