//! esplog_common - shared core for the esplogctl tool.
//!
//! Discovers ESP-IDF log tags in firmware sources and builds the MQTT
//! command messages that change per-tag verbosity on a running device.

pub mod config;
pub mod error;
pub mod level;
pub mod publish;
pub mod scanner;
pub mod secrets;

pub use config::ToolConfig;
pub use error::Error;
pub use level::LogLevel;
pub use publish::PublishRequest;
