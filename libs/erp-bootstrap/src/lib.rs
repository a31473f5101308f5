//! Process bootstrap shared by the ERP binaries.
//!
//! - [`config`]: layered configuration (defaults, YAML, environment)
//! - [`logging`]: `tracing` subscriber setup
//! - [`signals`]: SIGINT/SIGTERM handling
//! - [`http`]: router finishing layers and the serve loop

pub mod config;
pub mod http;
pub mod logging;
pub mod signals;

pub use config::{ConfigError, Environment, LoggingConfig, LogFormat, ServerConfig, load_layered};
