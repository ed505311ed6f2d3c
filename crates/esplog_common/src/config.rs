//! Tool configuration.
//!
//! Defaults are read from the environment exactly once at startup; the
//! resulting value is immutable and passed down explicitly. Individual
//! CLI flags override fields afterwards, in the binary.

use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Directory under $HOME holding operator credentials.
const CREDENTIALS_DIR: &str = ".zalevaci-nadrz";
const PASSWORD_FILE: &str = "mqtt_password";

/// Scan roots tried by default, relative to the working directory.
pub const DEFAULT_SCAN_ROOTS: [&str; 3] = ["main", "components", "managed_components"];

/// Broker and topic settings for one run.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub qos: u8,
    pub topic_root: String,
    pub pass_file: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            host: "mqtt.home.arpa".to_string(),
            port: 1883,
            user: "ha".to_string(),
            qos: 1,
            topic_root: "voda/septik".to_string(),
            pass_file: default_pass_file(),
        }
    }
}

impl ToolConfig {
    /// Build the configuration from the environment, falling back to the
    /// built-in defaults. Unparseable numeric values are warned about
    /// and ignored rather than failing startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("MQTT_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("MQTT_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring unparseable MQTT_PORT '{}'", port),
            }
        }
        if let Ok(user) = env::var("MQTT_USER") {
            config.user = user;
        }
        if let Ok(qos) = env::var("MQTT_QOS") {
            match qos.parse() {
                Ok(qos) => config.qos = qos,
                Err(_) => warn!("Ignoring unparseable MQTT_QOS '{}'", qos),
            }
        }
        if let Ok(topic_root) = env::var("TOPIC_ROOT") {
            config.topic_root = topic_root;
        }
        if let Ok(pass_file) = env::var("MQTT_PASS_FILE") {
            config.pass_file = PathBuf::from(pass_file);
        }

        config
    }

    /// QoS clamped to the valid 0..=2 range.
    pub fn effective_qos(&self) -> u8 {
        self.qos.min(2)
    }
}

fn default_pass_file() -> PathBuf {
    let home = env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    home.join(CREDENTIALS_DIR).join(PASSWORD_FILE)
}
