//! Configuration loading for ghteam.toml
//!
//! The file only carries integration entries; everything else about an
//! invocation comes from the action input.

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{parse_ghteam_toml, parse_ghteam_toml_str, to_toml};
pub use paths::{config_path_in, default_config_path};
pub use schema::{
    DEFAULT_GITHUB_API_BASE_URL, DEFAULT_GITHUB_HOST, GhteamConfig, GitHubIntegrationConfig,
    IntegrationsConfig,
};
pub use store::ConfigStore;
