//! Configuration loader and defaults for the fretweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). Fields cover the listen address
//! (`host`, `port`) and the directory the page templates are served from
//! (`template_dir`).
//!
use std::env;

use once_cell::sync::Lazy;

/// Default listen address
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
const DEFAULT_PORT: u16 = 5000;

/// Default directory containing the page templates
const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Application configuration containing network and template settings
pub struct Config {
    /// Listen address for the HTTP server
    pub host: String,
    /// Listen port for the HTTP server
    pub port: u16,
    /// Directory the index template is loaded from
    pub template_dir: String,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    host: env::var("FRETWEB_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
    port: env::var("FRETWEB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),

    template_dir: env::var("FRETWEB_TEMPLATE_DIR")
        .unwrap_or_else(|_| DEFAULT_TEMPLATE_DIR.into()),
});
