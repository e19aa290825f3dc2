//! # Schoolmap Server
//!
//! HTTP API server for registering schools and listing them by proximity.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod handlers;
pub mod server;

pub use server::{AppState, Server, ServerConfig};
