// src/specs/details.rs
//! Project details sheet: free-form `id, category, label, value` lines,
//! one per detail, shown per project in sheet order.

use serde::Serialize;

use crate::csv::{Row, parse_table};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    /// Project this line belongs to.
    pub id: String,
    pub category: String,
    pub label: String,
    pub value: String,
}

impl ProjectDetail {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.text("id"),
            category: row.text("category"),
            label: row.text("label"),
            value: row.text("value"),
        }
    }
}

pub fn shape(rows: &[Row]) -> Vec<ProjectDetail> {
    rows.iter().map(ProjectDetail::from_row).collect()
}

pub fn parse(text: &str) -> Vec<ProjectDetail> {
    shape(&parse_table(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_sheet_order() {
        let doc = "id,category,label,value\n\
                   koivula,Yleistä,Valmistuu,2026\n\
                   koivula,,Tontti,Oma\n\
                   mänty,Yleistä,Valmistuu,2027\n";
        let got = parse(doc);
        assert_eq!(got.len(), 3);
        assert_eq!(got[1].label, "Tontti");
        assert_eq!(got[1].category, "");
        assert_eq!(got[2].id, "mänty");
    }
}
