// tests/state.rs
//
// AppState only ever moves in whole steps.
mod common;

use common::*;
use valtti_cms::config::options::SourceKind;
use valtti_cms::state::{AppState, LoadStatus};

#[test]
fn fresh_state_is_pending_and_empty() {
    let state = AppState::new();
    assert_eq!(state.status(), &LoadStatus::Pending);
    assert!(!state.is_loaded());
    assert!(state.error().is_none());
    assert!(state.data().projects.is_empty());
}

#[test]
fn successful_reload_applies_everything() {
    let mut state = AppState::new();
    state.reload(&sources(true), &all_ok(), None).unwrap();

    assert!(state.is_loaded());
    assert_eq!(state.data().projects.len(), 3);
    assert_eq!(state.data().models.len(), 2);
    assert_eq!(state.data().content.len(), 4);
    assert_eq!(state.data().project_details.len(), 4);
}

#[test]
fn failed_first_load_applies_nothing() {
    // content and projects succeed, models fails
    let fetch = all_ok().status("mem://models", 500);
    let mut state = AppState::new();
    let err = state.reload(&sources(true), &fetch, None).unwrap_err();

    assert_eq!(err.failed_sources(), vec![SourceKind::Models]);
    assert!(!state.is_loaded());
    assert_eq!(state.error(), Some(&err));
    assert!(state.data().content.is_empty());
    assert!(state.data().projects.is_empty());
    assert!(state.data().models.is_empty());
}

#[test]
fn failed_reload_keeps_previous_data() {
    let mut state = AppState::new();
    state.reload(&sources(true), &all_ok(), None).unwrap();
    let before = state.data().clone();

    let broken = all_ok()
        .ok("mem://projects", "name,progress\nUusi,99\n")
        .status("mem://content", 503);
    assert!(state.reload(&sources(true), &broken, None).is_err());

    assert_eq!(state.data(), &before);
    assert!(matches!(state.status(), LoadStatus::Failed(_)));
}

#[test]
fn later_success_replaces_wholesale() {
    let mut state = AppState::new();
    state.reload(&sources(true), &all_ok(), None).unwrap();

    let smaller = all_ok().ok("mem://projects", "name,progress\nUusi,99\n");
    state.reload(&sources(false), &smaller, None).unwrap();

    assert!(state.is_loaded());
    assert_eq!(state.data().projects.len(), 1);
    assert_eq!(state.data().projects[0].progress, 99);
    assert!(state.data().project_details.is_empty());
}
