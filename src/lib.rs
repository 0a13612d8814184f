//! Site sandbox server: HTTP API, MCP tools and CLI around [`sandbox_core`].

pub mod api;
pub mod client;
pub mod config;
pub mod mcp;
pub mod store;

pub use sandbox_core as engine;
