//! Template loading for the fretweb pages.
//!
//! Templates are plain files read from the configured template directory on
//! every request, so edits show up on the next request without a restart.
//! Nothing is interpolated; the file contents are returned verbatim.
//!
use std::{io, path::Path};

/// File name of the main page template
pub const INDEX_TEMPLATE: &str = "index.html";

/// Read a template from `dir`, returning its contents verbatim
pub async fn load(dir: &Path, name: &str) -> io::Result<String> {
    tokio::fs::read_to_string(dir.join(name)).await
}
