pub mod cli;
pub mod settings;

pub use cli::CliArgs;
pub use settings::{AppConfig, ProviderConfig};
