//! staticd - Event-driven static file server
//!
//! Core library for the epoll reactor and HTTP handling.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
