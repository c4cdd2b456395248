pub mod app_config;
mod branch;
mod config;

pub use app_config::{AppConfig, Environment};
pub use branch::{Branch, Enquiry, GalleryImage, LocationPerk, NewEnquiry, RoomRate};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
