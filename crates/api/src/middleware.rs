/// Bearer token resolution into the calling actor
pub mod auth;
/// Error to HTTP response mapping
pub mod error_handling;
