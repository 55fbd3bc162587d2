//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the request handler.

pub mod mime;
pub mod response;
pub mod supported;

// Re-export commonly used types
pub use response::{
    build_201_response, build_400_response, build_404_response, build_405_response,
    build_406_response, build_413_response, build_415_response, build_500_response,
    build_file_response, build_options_response, HttpResponse,
};
