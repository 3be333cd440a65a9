//! HTTP surface for the graph store protocol

mod handler;
mod server;

pub use handler::ApiError;
pub use server::{router, HttpServer, ServerConfig};
