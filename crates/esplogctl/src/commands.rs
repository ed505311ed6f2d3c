//! Command implementations: `list` and `set`.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use esplog_common::config::{ToolConfig, DEFAULT_SCAN_ROOTS};
use esplog_common::error::Error;
use esplog_common::level::LogLevel;
use esplog_common::publish::{self, PublishRequest, DEFAULT_TRANSPORT_BIN};
use esplog_common::{scanner, secrets};

use crate::cli::SetArgs;
use crate::prompt;

/// JSON shape for `list --json`.
#[derive(Serialize)]
struct TagListing {
    roots: Vec<String>,
    tags: Vec<String>,
}

/// Resolve the scan roots: the default project layout plus any extras
/// from the command line, all relative to the working directory.
fn scan_roots(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = DEFAULT_SCAN_ROOTS.iter().map(PathBuf::from).collect();
    roots.extend(extra.iter().cloned());
    roots
}

/// Minimal PATH lookup; probes without invoking the binary.
fn transport_available(bin: &str) -> bool {
    let Some(path) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path).any(|dir| dir.join(bin).is_file())
}

/// Scan and print the discovered tags, one per line (or as JSON).
pub fn list(extra_roots: &[PathBuf], json: bool) -> Result<()> {
    let roots = scan_roots(extra_roots);
    let tags = scanner::discover_tags(&roots);

    if json {
        let listing = TagListing {
            roots: roots.iter().map(|r| r.display().to_string()).collect(),
            tags,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for tag in &tags {
            println!("{}", tag);
        }
    }
    Ok(())
}

/// Full flow: scan, pick tag and level, bootstrap the password, publish.
pub fn set(config: &ToolConfig, extra_roots: &[PathBuf], args: &SetArgs) -> Result<()> {
    // Publishing needs the external client up front; dry-run does not.
    if !args.dry_run && !transport_available(DEFAULT_TRANSPORT_BIN) {
        return Err(Error::Publish(format!("'{}' not found on PATH", DEFAULT_TRANSPORT_BIN)).into());
    }

    let tags = scanner::discover_tags(&scan_roots(extra_roots));
    debug!("Discovered {} tags", tags.len());

    let tag = if args.all {
        "*".to_string()
    } else {
        match args.tag.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => prompt::pick_tag(&tags)?,
        }
    };

    let level_input = match &args.level {
        Some(level) => level.clone(),
        None => prompt::ask_level()?,
    };
    let level = LogLevel::normalize(&level_input)?;

    let pass_file = args
        .pass_file
        .clone()
        .unwrap_or_else(|| config.pass_file.clone());
    let password = secrets::ensure_password(&pass_file)?;

    let req = PublishRequest {
        host: args.host.clone().unwrap_or_else(|| config.host.clone()),
        port: args.port.unwrap_or(config.port),
        user: args.user.clone().unwrap_or_else(|| config.user.clone()),
        password,
        qos: args.qos.unwrap_or_else(|| config.effective_qos()),
        topic_root: args
            .topic_root
            .clone()
            .unwrap_or_else(|| config.topic_root.clone()),
        tag,
        level,
        dry_run: args.dry_run,
        transport_bin: DEFAULT_TRANSPORT_BIN.to_string(),
    };

    println!("Publishing: topic={} payload={}", req.topic(), req.payload());
    if req.dry_run {
        println!("Dry-run: publish skipped");
    }

    publish::publish(&req)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scan_roots_come_first() {
        let roots = scan_roots(&[PathBuf::from("extra")]);
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[0], PathBuf::from("main"));
        assert_eq!(roots[3], PathBuf::from("extra"));
    }

    #[test]
    fn test_transport_probe_misses_nonexistent_binary() {
        assert!(!transport_available("definitely-not-a-real-binary-name"));
    }
}
