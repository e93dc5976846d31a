// src/specs/projects.rs
//! Projects sheet: one sellable listing per row.
//!
//! Columns: `name, status, statusText, location, price, progress, image,
//! link, marketingText, modelId`.

use serde::{Serialize, Serializer};

use crate::csv::{Row, parse_table};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Construction,
    Marketing,
    Sold,
    /// Anything else the sheet contains, kept verbatim (may be empty).
    Other(String),
}

impl ProjectStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "construction" => ProjectStatus::Construction,
            "marketing"    => ProjectStatus::Marketing,
            "sold"         => ProjectStatus::Sold,
            other          => ProjectStatus::Other(s!(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Construction => "construction",
            ProjectStatus::Marketing    => "marketing",
            ProjectStatus::Sold         => "sold",
            ProjectStatus::Other(s)     => s,
        }
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub status: ProjectStatus,
    pub status_text: String,
    pub location: String,
    pub price: String,
    /// Percent, 0..=100.
    pub progress: u8,
    pub image: String,
    pub link: String,
    pub marketing_text: String,
    pub model_id: Option<String>,
}

impl Project {
    pub fn from_row(row: &Row) -> Self {
        let model_id = row.text("modelId");
        Self {
            name: row.text("name"),
            status: ProjectStatus::parse(&row.text("status")),
            status_text: row.text("statusText"),
            location: row.text("location"),
            price: row.text("price"),
            progress: row.int("progress").clamp(0, 100) as u8,
            image: row.text("image"),
            link: row.text("link"),
            marketing_text: row.text("marketingText"),
            model_id: if model_id.is_empty() { None } else { Some(model_id) },
        }
    }
}

pub fn shape(rows: &[Row]) -> Vec<Project> {
    rows.iter().map(Project::from_row).collect()
}

pub fn parse(text: &str) -> Vec<Project> {
    shape(&parse_table(text))
}
