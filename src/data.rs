// src/data.rs
//
// Canonical loaded data and the read-only views renderers build from it.
//
// - SiteData: everything one successful load produced. Never mutated after
//             construction; a reload swaps in a new value.
// - Views:    lookups across datasets (model ↔ active project, details
//             grouped by category) and presentation fallbacks for projects.

use serde::Serialize;

use crate::config::consts::{DEFAULT_LINK, DEFAULT_STATUS_TEXT, LOW_PROGRESS_THRESHOLD, PLACEHOLDER_IMAGE};
use crate::csv::ContentMap;
use crate::specs::details::ProjectDetail;
use crate::specs::models::{Model, ModelCatalog};
use crate::specs::projects::{Project, ProjectStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub content: ContentMap,
    pub projects: Vec<Project>,
    pub models: ModelCatalog,
    pub project_details: Vec<ProjectDetail>,
}

impl SiteData {
    /// Content text for a page element key.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.content.get(key).map(|s| s.as_str())
    }

    /// Projects worth a card: rows with a name.
    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.name.is_empty())
    }

    /// First project built on `model_id` that is not sold yet.
    pub fn active_project_for_model(&self, model_id: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.model_id.as_deref() == Some(model_id) && p.status != ProjectStatus::Sold)
    }

    pub fn model(&self, id: &str) -> Option<&Model> {
        self.models.get(id)
    }

    /// Detail lines of one project, grouped by category in sheet order.
    ///
    /// A new group starts whenever a non-empty category differs from the
    /// current one; lines with an empty category stay in the current group.
    pub fn details_for_project(&self, project_id: &str) -> Vec<DetailGroup<'_>> {
        let mut groups: Vec<DetailGroup<'_>> = Vec::new();
        for d in self.project_details.iter().filter(|d| d.id == project_id) {
            let starts_new = match groups.last() {
                None => true,
                Some(g) => !d.category.is_empty() && g.category != Some(d.category.as_str()),
            };
            if starts_new {
                let category = if d.category.is_empty() { None } else { Some(d.category.as_str()) };
                groups.push(DetailGroup { category, items: Vec::new() });
            }
            if let Some(g) = groups.last_mut() {
                g.items.push(d);
            }
        }
        groups
    }
}

/// Consecutive detail lines under one heading. `category` is None for lines
/// that precede any heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailGroup<'a> {
    pub category: Option<&'a str>,
    pub items: Vec<&'a ProjectDetail>,
}

/* ---------------- Project presentation ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Construction,
    Marketing,
}

/// Progress bar colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressTone {
    Emerald,
    EmeraldDark,
    Amber,
}

impl Project {
    pub fn badge(&self) -> Badge {
        match self.status {
            ProjectStatus::Construction => Badge::Construction,
            _ => Badge::Marketing,
        }
    }

    pub fn progress_tone(&self) -> ProgressTone {
        match self.status {
            ProjectStatus::Construction => ProgressTone::EmeraldDark,
            ProjectStatus::Marketing if self.progress < LOW_PROGRESS_THRESHOLD => ProgressTone::Amber,
            _ => ProgressTone::Emerald,
        }
    }

    pub fn display_image(&self) -> &str {
        or_default(&self.image, PLACEHOLDER_IMAGE)
    }

    pub fn display_status_text(&self) -> &str {
        or_default(&self.status_text, DEFAULT_STATUS_TEXT)
    }

    pub fn display_link(&self) -> &str {
        or_default(&self.link, DEFAULT_LINK)
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/* ---------------- Image carousel ---------------- */

/// Position in a model's image list; steps wrap around both ends.
#[derive(Clone, Debug)]
pub struct ImageCursor<'a> {
    images: &'a [String],
    ix: usize,
}

impl<'a> ImageCursor<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { images: &model.images, ix: 0 }
    }

    pub fn index(&self) -> usize { self.ix }

    pub fn current(&self) -> Option<&'a str> {
        self.images.get(self.ix).map(|s| s.as_str())
    }

    pub fn next(&mut self) -> Option<&'a str> {
        if !self.images.is_empty() {
            self.ix = (self.ix + 1) % self.images.len();
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<&'a str> {
        let n = self.images.len();
        if n > 0 {
            self.ix = (self.ix + n - 1) % n;
        }
        self.current()
    }
}
