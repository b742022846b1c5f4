pub mod config_service;
pub mod dev_session_seeder;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::dev_session_seeder::DevSessionSeeder;
pub use crate::paths::SnapmoodPaths;
