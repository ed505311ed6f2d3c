//! Operator credential bootstrap.
//!
//! The broker password lives in a file under the operator's home
//! directory. First use prompts for it without echo and persists it with
//! owner-only permissions, so later runs never touch the terminal.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Error;

/// Read the broker password, prompting for it and persisting it when the
/// file is missing or empty.
pub fn ensure_password(pass_file: &Path) -> Result<String, Error> {
    if let Some(parent) = pass_file.parent() {
        fs::create_dir_all(parent)?;
    }

    if let Ok(bytes) = fs::read(pass_file) {
        let content = String::from_utf8_lossy(&bytes);
        let password = content.trim();
        if !password.is_empty() {
            return Ok(password.to_string());
        }
    }

    let prompt = format!("MQTT password ({}): ", pass_file.display());
    let password = rpassword::prompt_password(prompt)?;
    let password = password.trim().to_string();
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }

    fs::write(pass_file, &password)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(pass_file, fs::Permissions::from_mode(0o600))?;
    }
    info!("Password stored in {}", pass_file.display());
    Ok(password)
}
