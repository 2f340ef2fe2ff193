//! fretweb library crate.
//!
//! Serves the fretboard visualization page over HTTP. The crate contains
//! three small modules: `server` (routing and request handling), `config`
//! (environment-based settings) and `templates` (template loading). The
//! binary entrypoint in `main.rs` only starts the server.
//!
/// HTTP server implementation and request handling
pub mod server;
/// Configuration management and settings
pub mod config;
/// Template loading and page retrieval
pub mod templates;
