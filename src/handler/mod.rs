//! Request handler module
//!
//! Fallback routing decision, static file serving, and request dispatch.

pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
