//! HTTP protocol layer module
//!
//! Provides HTTP response building, decoupled from routing and business logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_400_response, build_403_response, build_404_response, build_413_response,
    build_500_response, build_text_response,
};
