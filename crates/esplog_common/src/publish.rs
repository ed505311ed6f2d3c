//! MQTT command publishing via the external mosquitto_pub client.
//!
//! Framing is fixed: topic `<root>/cmd/log/level`, payload
//! `<tag>=<LEVEL>`. The device side splits the payload on `=`, so both
//! halves must agree byte for byte.

use std::process::Command;

use tracing::{debug, info};

use crate::error::Error;
use crate::level::LogLevel;

/// Default transport client binary, expected on PATH.
pub const DEFAULT_TRANSPORT_BIN: &str = "mosquitto_pub";

/// One log-level command. Built once per run, published once, discarded.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Delivery guarantee: 0 at-most-once, 1 at-least-once, 2 exactly-once.
    pub qos: u8,
    pub topic_root: String,
    /// Literal tag text, or `*` for all tags. Never expanded here.
    pub tag: String,
    pub level: LogLevel,
    pub dry_run: bool,
    /// Transport client to invoke. Overridable so failure paths can be
    /// exercised against a stub.
    pub transport_bin: String,
}

impl PublishRequest {
    /// Command topic under the configured topic root.
    pub fn topic(&self) -> String {
        format!("{}/cmd/log/level", self.topic_root)
    }

    /// Wire payload, canonical level name on the right of the `=`.
    pub fn payload(&self) -> String {
        format!("{}={}", self.tag, self.level)
    }
}

/// Publish one log-level command.
///
/// Dry-run logs the framing and returns without invoking anything.
/// Otherwise this blocks on a single transport invocation: no retry, no
/// backoff, no timeout. Callers are expected to have checked that the
/// transport binary exists before getting here; a missing binary is
/// still reported as a publish failure rather than a panic.
pub fn publish(req: &PublishRequest) -> Result<(), Error> {
    let topic = req.topic();
    let payload = req.payload();

    info!("Publishing: topic={} payload={}", topic, payload);

    if req.dry_run {
        info!("Dry-run: transport invocation skipped");
        return Ok(());
    }

    let port = req.port.to_string();
    let qos = req.qos.to_string();
    let output = Command::new(&req.transport_bin)
        .args([
            "-d",
            "-h",
            req.host.as_str(),
            "-p",
            port.as_str(),
            "-u",
            req.user.as_str(),
            "-P",
            req.password.as_str(),
            "-q",
            qos.as_str(),
            "-t",
            topic.as_str(),
            "-m",
            payload.as_str(),
        ])
        .output()
        .map_err(|e| Error::Publish(format!("cannot run {}: {}", req.transport_bin, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        let reason = if detail.is_empty() {
            format!("{} exited with {}", req.transport_bin, output.status)
        } else {
            format!("{} exited with {}: {}", req.transport_bin, output.status, detail)
        };
        return Err(Error::Publish(reason));
    }

    debug!("Transport exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(tag: &str, level: LogLevel, dry_run: bool) -> PublishRequest {
        PublishRequest {
            host: "mqtt.home.arpa".to_string(),
            port: 1883,
            user: "ha".to_string(),
            password: "secret".to_string(),
            qos: 1,
            topic_root: "voda/septik".to_string(),
            tag: tag.to_string(),
            level,
            dry_run,
            transport_bin: DEFAULT_TRANSPORT_BIN.to_string(),
        }
    }

    #[test]
    fn test_topic_framing() {
        let req = request("pump", LogLevel::Info, true);
        assert_eq!(req.topic(), "voda/septik/cmd/log/level");
    }

    #[test]
    fn test_payload_framing() {
        let req = request("pump", LogLevel::Info, true);
        assert_eq!(req.payload(), "pump=INFO");
    }

    #[test]
    fn test_wildcard_tag_passes_through() {
        let req = request("*", LogLevel::Debug, true);
        assert_eq!(req.payload(), "*=DEBUG");
    }

    #[test]
    fn test_dry_run_never_invokes_transport() {
        // A transport binary that cannot exist: if dry-run tried to spawn
        // it, publish would fail instead of succeeding.
        let mut req = request("pump", LogLevel::Info, true);
        req.transport_bin = "/nonexistent/mosquitto_pub".to_string();
        assert!(publish(&req).is_ok());
    }

    #[test]
    fn test_transport_nonzero_exit_is_publish_error() {
        let mut req = request("pump", LogLevel::Info, false);
        req.transport_bin = "false".to_string();
        let err = publish(&req).unwrap_err();
        assert!(matches!(err, Error::Publish(_)), "got {:?}", err);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unspawnable_transport_is_publish_error() {
        let mut req = request("pump", LogLevel::Info, false);
        req.transport_bin = "/nonexistent/mosquitto_pub".to_string();
        let err = publish(&req).unwrap_err();
        match err {
            Error::Publish(reason) => assert!(reason.contains("cannot run")),
            other => panic!("expected Publish, got {:?}", other),
        }
    }
}
