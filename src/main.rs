//! fretweb crate entrypoint.
//!
//! Starts the Tokio runtime and launches the web server defined in the
//! `server` module. Keep this file minimal — most application logic lives
//! in `server`, `config`, and `templates`.
//!
/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    fretweb::server::run().await;
}
