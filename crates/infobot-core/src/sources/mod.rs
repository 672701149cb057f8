//! Thin HTTP clients for the external information sources.
//!
//! Each client performs exactly one GET per call: no retries, no caching.
//! The first failure is final and surfaces to the responder that asked.

pub mod news;
pub mod weather;
pub mod wikipedia;

/// Configuration-presence check for credentialed sources, resolved at call
/// time. `Unconfigured` is a degraded-success path consumed by the
/// responders, not an error.
pub enum Provider<T> {
    Configured(T),
    Unconfigured,
}
