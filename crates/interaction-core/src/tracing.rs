//! # Observability
//!
//! Structured logging for the interaction engine. Resources and controllers
//! emit `tracing` events with `path`, `verb`, and `status` fields; this module
//! only installs the subscriber that prints them.
//!
//! ```bash
//! RUST_LOG=info cargo run -p interaction-sdk
//! RUST_LOG=interaction_core=debug cargo run -p interaction-sdk
//! ```
//!
//! With `RUST_LOG=debug` every verb entry point opens a span named after the
//! method (`get`, `post`, ...) carrying the resource path and identifier.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once from a binary. Libraries and tests never call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
