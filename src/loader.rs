// src/loader.rs
//
// One load cycle: fetch every configured source concurrently, wait for all
// of them, then parse. A failed required source fails the batch and nothing
// is parsed, so callers either get a complete `SiteData` or an error. The
// details sheet answering with an error status only empties the detail list.

use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use crate::{
    config::options::{SourceKind, SourceOptions},
    csv::parse_key_values,
    data::SiteData,
    error::{FetchError, LoadError, SourceFailure},
    net::Fetch,
    progress::Progress,
    specs::{details, models, projects},
};

/// Raw document text per source, as fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Documents {
    pub content: String,
    pub projects: String,
    pub models: String,
    /// None when the details source is not configured.
    pub details: Option<String>,
}

impl Documents {
    /// Run every document through its parser.
    pub fn parse(&self) -> SiteData {
        let project_details = match self.details.as_deref() {
            Some(text) if !text.trim().is_empty() => details::parse(text),
            _ => {
                logf!("no project details data found or source not configured");
                Vec::new()
            }
        };

        SiteData {
            content: parse_key_values(&self.content),
            projects: projects::parse(&self.projects),
            models: models::parse(&self.models),
            project_details,
        }
    }
}

type Outcome = (SourceKind, Result<String, FetchError>);

/// Fetch all configured sources in parallel and parse them.
pub fn load(
    sources: &SourceOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<SiteData, LoadError> {
    let docs = fetch_all(sources, fetcher, progress)?;
    let data = docs.parse();
    logf!(
        "loaded {} content keys, {} projects, {} models, {} detail rows",
        data.content.len(),
        data.projects.len(),
        data.models.len(),
        data.project_details.len()
    );
    Ok(data)
}

/// The fetch half of `load`: all-or-nothing over the required sources.
pub fn fetch_all(
    sources: &SourceOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Documents, LoadError> {
    let jobs = sources.configured();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(jobs.len());
        p.log("Fetching CMS data…");
    }

    let outcomes = thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<Outcome>();

        let handles: Vec<_> = jobs
            .iter()
            .map(|(kind, url)| {
                let tx = tx.clone();
                let kind = *kind;
                let handle = scope.spawn(move || {
                    logd!("fetching {kind} from {url}");
                    let _ = tx.send((kind, fetcher.get(url)));
                });
                (kind, url, handle)
            })
            .collect();
        drop(tx); // rx ends once every worker is done

        let mut outcomes: Vec<Outcome> = Vec::with_capacity(handles.len());
        for (kind, result) in rx.iter() {
            if let Some(p) = progress.as_deref_mut() {
                match &result {
                    Ok(_)  => p.source_done(kind),
                    Err(e) => p.source_failed(kind, &e.to_string()),
                }
            }
            outcomes.push((kind, result));
        }

        // a panicked worker never sent; report it like any other failure
        let lost: Vec<Outcome> = handles
            .into_iter()
            .filter_map(|(kind, url, h)| {
                h.join().err().map(|_| (kind, Err(FetchError::Lost { url: url.clone() })))
            })
            .collect();
        if let Some(p) = progress.as_deref_mut() {
            for (kind, _) in &lost {
                p.source_failed(*kind, "worker stopped without a result");
            }
        }
        outcomes.extend(lost);
        outcomes
    });

    let result = collect(outcomes);
    if let Err(e) = &result {
        loge!("CMS load failed: {e}");
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn collect(outcomes: Vec<Outcome>) -> Result<Documents, LoadError> {
    let mut texts: HashMap<SourceKind, String> = HashMap::new();
    let mut failures: Vec<SourceFailure> = Vec::new();
    for (source, result) in outcomes {
        match result {
            Ok(text) => { texts.insert(source, text); }
            Err(error @ FetchError::Status { .. }) if source == SourceKind::Details => {
                loge!("{source} unavailable, continuing without project details: {error}");
            }
            Err(error) => failures.push(SourceFailure { source, error }),
        }
    }

    if !failures.is_empty() {
        failures.sort_by_key(|f| f.source);
        return Err(LoadError::Fetch(failures));
    }

    let mut take = |kind: SourceKind| texts.remove(&kind);
    Ok(Documents {
        content: take(SourceKind::Content).unwrap_or_default(),
        projects: take(SourceKind::Projects).unwrap_or_default(),
        models: take(SourceKind::Models).unwrap_or_default(),
        details: take(SourceKind::Details),
    })
}
