// src/error.rs

use std::fmt;

use crate::config::options::SourceKind;

/// One failed request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, timeout or body read failure.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    /// The worker thread for this request panicked before reporting.
    #[error("worker fetching {url} stopped without a result")]
    Lost { url: String },
}

impl FetchError {
    pub fn transport(url: &str, err: impl fmt::Display) -> Self {
        FetchError::Transport { url: s!(url), message: err.to_string() }
    }
}

/// A source that did not deliver its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: SourceKind,
    pub error: FetchError,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// Whole-batch load failure. Nothing from the batch is applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("network response was not ok ({})", join_failures(.0))]
    Fetch(Vec<SourceFailure>),
}

impl LoadError {
    /// Sources that failed, in reporting order.
    pub fn failed_sources(&self) -> Vec<SourceKind> {
        let LoadError::Fetch(list) = self;
        list.iter().map(|f| f.source).collect()
    }

    /// Text shown to site visitors when the load fails.
    pub fn user_message(&self) -> String {
        format!(
            "Virhe ladattaessa sisältöä: {self}. \
             Tarkista, että Google Sheets on julkaistu (File > Share > Publish to web)."
        )
    }
}

fn join_failures(list: &[SourceFailure]) -> String {
    list.iter().map(|f| f.to_string()).collect::<Vec<_>>().join("; ")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config line {line}: {message}")]
    Parse { line: usize, message: String },
}
