//! # Dataset “specs”
//!
//! One module per published sheet. Each spec knows the sheet's column names
//! and how to shape parsed [`Row`](crate::csv::Row)s into typed records.
//!
//! ## What lives here
//! - **Column names** as published (camelCase, `specs_*` prefixes).
//! - **Shaping rules**: status parsing, progress clamping, image list
//!   derivation, fixed spec lists.
//!
//! ## What does **not** live here
//! - **Line/field splitting** – `csv`.
//! - **Fetching and state updates** – `loader` and `state`.
//! - **Lookups across datasets** – `data`.
//!
//! ## Conventions
//! - Missing columns read as `""`; shaping never fails.
//! - Output order follows sheet order.
pub mod details;
pub mod models;
pub mod projects;
