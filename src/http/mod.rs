//! HTTP protocol layer module
//!
//! Response builders and MIME detection, decoupled from the routing logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_403_response, build_404_response, build_405_response, build_413_response,
    build_500_response, build_options_response,
};
