mod app_config;
mod config;
mod defaults;
pub mod site;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use site::{
    load_site, load_site_or_builtin, BusinessProfile, BusinessType, GeoPoint, MenuItem,
    MenuProfile, MenuSection, OpenGraphImage, OrganizationProfile, PageConfig, PostalAddress,
    Rating, SiteMetadata, SiteProfile, SiteSource, SocialText, StaffMember,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read site file {path}: {source}")]
    SiteFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse site file: {0}")]
    SiteFileParse(#[from] serde_yaml::Error),

    #[error("site validation failed: {0}")]
    Validation(String),
}
