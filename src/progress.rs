// src/progress.rs
use crate::config::options::SourceKind;

/// Lightweight progress reporting for a load.
/// Frontends implement this to surface status; every method is optional.
pub trait Progress {
    /// Called at the start with the number of sources being fetched.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source delivered its document.
    fn source_done(&mut self, _source: SourceKind) {}

    /// One source failed. Required sources fail the load; details do not.
    fn source_failed(&mut self, _source: SourceKind, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
