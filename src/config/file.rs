// src/config/file.rs
//
// Plain `key = value` config. `#` starts a comment line; blank lines and
// unknown keys are ignored. An empty `details_url` switches details off.

use std::{fs, io, path::Path, time::Duration};

use super::options::{SourceKind, SourceOptions};
use crate::error::ConfigError;

/// Read `path` on top of the defaults. A missing file is not an error.
pub fn load(path: &Path) -> Result<SourceOptions, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("no config at {}; using defaults", path.display());
            return Ok(SourceOptions::default());
        }
        Err(e) => {
            return Err(ConfigError::Io { path: path.display().to_string(), source: e });
        }
    };
    let mut opts = SourceOptions::default();
    apply(&mut opts, &text)?;
    Ok(opts)
}

/// Apply config text onto existing options.
pub fn apply(opts: &mut SourceOptions, text: &str) -> Result<(), ConfigError> {
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let Some(eq) = line.find('=') else {
            return Err(ConfigError::Parse { line: i + 1, message: format!("expected key = value, got `{line}`") });
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();

        match key {
            "content_url"  => opts.set_url(SourceKind::Content, val),
            "projects_url" => opts.set_url(SourceKind::Projects, val),
            "models_url"   => opts.set_url(SourceKind::Models, val),
            "details_url"  => opts.set_url(SourceKind::Details, val),
            "timeout_secs" => {
                let secs: u64 = val.parse().map_err(|_| ConfigError::Parse {
                    line: i + 1,
                    message: format!("timeout_secs must be a whole number, got `{val}`"),
                })?;
                opts.timeout = Duration::from_secs(secs);
            }
            other => logd!("config line {}: ignoring unknown key `{other}`", i + 1),
        }
    }
    Ok(())
}

/// Render options back into config text.
pub fn render(opts: &SourceOptions) -> String {
    let mut s = s!();
    s.push_str(&format!("content_url = {}\n", opts.content_url));
    s.push_str(&format!("projects_url = {}\n", opts.projects_url));
    s.push_str(&format!("models_url = {}\n", opts.models_url));
    s.push_str(&format!("details_url = {}\n", opts.details_url.as_deref().unwrap_or("")));
    s.push_str(&format!("timeout_secs = {}\n", opts.timeout.as_secs()));
    s
}

/// Write options as config text, replacing any existing file.
pub fn save(path: &Path, opts: &SourceOptions) -> Result<(), ConfigError> {
    fs::write(path, render(opts))
        .map_err(|e| ConfigError::Io { path: path.display().to_string(), source: e })
}
