pub mod config;
pub mod dev;
pub mod notice;
pub mod presets;
pub mod request;
