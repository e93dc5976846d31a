// src/specs/models.rs
//! Models sheet: the housing floor-plan catalog.
//!
//! Columns: `id, title, size, shortDesc, description, mainImage, images,
//! specs_room_sqm, specs_total_sqm, specs_bedrooms, specs_bathrooms`.
//!
//! `images` is pipe-delimited (`a.jpg|b.jpg`). When it is empty the single
//! `mainImage` is used, so `images` is never empty.

use std::collections::HashMap;

use serde::Serialize;

use crate::csv::{Row, parse_table};

/// Labels and source columns of the spec table, in display order.
pub const SPEC_COLUMNS: [(&str, &str); 4] = [
    ("Huoneistoala", "specs_room_sqm"),
    ("Kerrosala",    "specs_total_sqm"),
    ("Makuuhuoneet", "specs_bedrooms"),
    ("Kylpyhuoneet", "specs_bathrooms"),
];

/// How many leading specs the detailed table repeats.
pub const DETAILED_SPEC_COUNT: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub title: String,
    pub size: String,
    /// Card meta line; the sheet has no column of its own so it mirrors `size`.
    pub meta: String,
    pub short_desc: String,
    /// HTML.
    pub description: String,
    pub images: Vec<String>,
    pub specs: Vec<Spec>,
    /// Currently the first two `specs` entries only.
    pub detailed_specs: Vec<Spec>,
}

impl Model {
    pub fn from_row(row: &Row) -> Self {
        let specs: Vec<Spec> = SPEC_COLUMNS
            .iter()
            .map(|(label, col)| Spec { label: s!(*label), value: row.text(col) })
            .collect();
        let detailed_specs = specs.iter().take(DETAILED_SPEC_COUNT).cloned().collect();
        let size = row.text("size");

        Self {
            id: row.text("id"),
            title: row.text("title"),
            meta: size.clone(),
            size,
            short_desc: row.text("shortDesc"),
            description: row.text("description"),
            images: image_list(&row.text("images"), &row.text("mainImage")),
            specs,
            detailed_specs,
        }
    }
}

/// Pipe list → trimmed segments; plain value → one image; empty → main image.
pub fn image_list(images: &str, main_image: &str) -> Vec<String> {
    if images.contains('|') {
        images.split('|').map(|s| s!(s.trim())).collect()
    } else if !images.is_empty() {
        vec![s!(images)]
    } else {
        vec![s!(main_image)]
    }
}

/// Models by id, iterated in the order ids first appeared in the sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    order: Vec<String>,
    by_id: HashMap<String, Model>,
}

impl ModelCatalog {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace. A replaced model keeps its original position.
    pub fn insert(&mut self, model: Model) {
        if !self.by_id.contains_key(&model.id) {
            self.order.push(model.id.clone());
        } else {
            logd!("model `{}` defined twice; keeping the later row", model.id);
        }
        self.by_id.insert(model.id.clone(), model);
    }

    pub fn get(&self, id: &str) -> Option<&Model> { self.by_id.get(id) }
    pub fn len(&self) -> usize { self.order.len() }
    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}

impl Serialize for ModelCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for m in self.iter() {
            map.serialize_entry(&m.id, m)?;
        }
        map.end()
    }
}

pub fn shape(rows: &[Row]) -> ModelCatalog {
    let mut catalog = ModelCatalog::new();
    for row in rows {
        catalog.insert(Model::from_row(row));
    }
    catalog
}

pub fn parse(text: &str) -> ModelCatalog {
    shape(&parse_table(text))
}
