pub mod log_dir;
pub mod logging;
pub mod settings;

pub use settings::{Cli, FileConfig, Settings, SettingsError};
