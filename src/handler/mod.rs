//! Request handler module
//!
//! Responsible for content-type admission, method dispatch and request body intake.
//! Static files are served for GET `/?filePath=` targets.

pub mod admission;
pub mod body;
pub mod router;
pub mod slot;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
