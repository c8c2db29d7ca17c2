pub mod cli;
pub mod config;
pub mod note;
pub mod preview;
pub mod project;
pub mod render;
pub mod scan;
pub mod text;

pub use cli::{Cli, Command};
pub use config::Config;

/// File name of the project registry under the user's config directory.
pub const PROJECTS_FILE: &str = "projects.json";

/// Default location of the project registry.
pub fn default_registry_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|p| p.join("note").join(PROJECTS_FILE))
}
