// src/state.rs
use crate::{
    config::options::SourceOptions,
    data::SiteData,
    error::LoadError,
    loader,
    net::Fetch,
    progress::Progress,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load attempt finished yet.
    #[default]
    Pending,
    Loaded,
    /// The latest attempt failed; data is whatever the previous success left.
    Failed(LoadError),
}

/// What renderers read. Constructed once, updated only through `apply`.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    data: SiteData,
    status: LoadStatus,
}

impl AppState {
    pub fn new() -> Self { Self::default() }

    /// Read-only view of the current data.
    pub fn data(&self) -> &SiteData { &self.data }
    pub fn status(&self) -> &LoadStatus { &self.status }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Single-step transition for one finished load attempt.
    /// Success swaps the data in whole; failure leaves it untouched.
    pub fn apply(&mut self, result: Result<SiteData, LoadError>) -> Result<(), LoadError> {
        match result {
            Ok(data) => {
                self.data = data;
                self.status = LoadStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                self.status = LoadStatus::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Fetch, parse and apply in one go.
    pub fn reload(
        &mut self,
        sources: &SourceOptions,
        fetcher: &dyn Fetch,
        progress: Option<&mut dyn Progress>,
    ) -> Result<(), LoadError> {
        let result = loader::load(sources, fetcher, progress);
        self.apply(result)
    }
}
