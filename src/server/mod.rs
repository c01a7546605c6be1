//! Event loop
//!
//! This module owns the listening socket and the epoll registration table
//! and turns readiness notifications into accepts and request handling.

pub mod reactor;

pub use reactor::Server;
