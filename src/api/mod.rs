//! HTTP server, JSON API and WebSocket

pub mod routes;
pub mod server;
pub mod websocket;

pub use server::*;
