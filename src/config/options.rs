// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// The four published documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    Content,
    Projects,
    Models,
    Details,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Content,
        SourceKind::Projects,
        SourceKind::Models,
        SourceKind::Details,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Content  => "content",
            SourceKind::Projects => "projects",
            SourceKind::Models   => "models",
            SourceKind::Details  => "details",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the documents live. Details is the only optional source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub content_url: String,
    pub projects_url: String,
    pub models_url: String,
    pub details_url: Option<String>,
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            content_url: sheet_csv_url(CONTENT_GID),
            projects_url: sheet_csv_url(PROJECTS_GID),
            models_url: sheet_csv_url(MODELS_GID),
            details_url: Some(sheet_csv_url(DETAILS_GID)),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SourceOptions {
    /// URL for `kind`, or None when that source is not configured.
    pub fn url(&self, kind: SourceKind) -> Option<&str> {
        match kind {
            SourceKind::Content  => Some(self.content_url.as_str()),
            SourceKind::Projects => Some(self.projects_url.as_str()),
            SourceKind::Models   => Some(self.models_url.as_str()),
            SourceKind::Details  => self.details_url.as_deref().filter(|u| !u.trim().is_empty()),
        }
    }

    /// Configured sources paired with their URLs, in `SourceKind::ALL` order.
    pub fn configured(&self) -> Vec<(SourceKind, String)> {
        SourceKind::ALL
            .iter()
            .filter_map(|&k| self.url(k).map(|u| (k, s!(u))))
            .collect()
    }

    pub fn set_url(&mut self, kind: SourceKind, url: &str) {
        let url = s!(url.trim());
        match kind {
            SourceKind::Content  => self.content_url = url,
            SourceKind::Projects => self.projects_url = url,
            SourceKind::Models   => self.models_url = url,
            SourceKind::Details  => {
                self.details_url = if url.is_empty() { None } else { Some(url) };
            }
        }
    }
}

/// What the CLI prints after a successful load.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Summary,
    Project(String),
    Model(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JsonTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OutputOptions {
    pub mode: OutputMode,
    pub json: Option<JsonTarget>,
    pub verbose: bool,
    /// Write the resolved source settings here instead of loading.
    pub write_config: Option<PathBuf>,
    pub help: bool,
}

/// Everything one CLI run needs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub output: OutputOptions,
}
