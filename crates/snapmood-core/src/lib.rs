pub mod config;
pub mod dev_account;
pub mod error;
pub mod notice;
pub mod preset;
pub mod request;

// Re-export common error type
pub use error::SnapmoodError;
