//! Integration tests for the load / edit / reflect cycle

mod common;

use colordinate::host::{extract_current, CommandSink, HighlightTable, HostError, RenderMode};
use colordinate::scheme::{self, Attribute};
use colordinate::session::{Session, SessionError};
use common::palette_model;

fn live_table() -> HighlightTable {
    let mut table = HighlightTable::new();
    table
        .execute(&scheme::colorscheme("palette", &palette_model()))
        .unwrap();
    table
}

#[test]
fn test_load_edit_reflect_cycle() {
    let mut table = live_table();
    let mut session = Session::new(String::new());
    session.load(&mut table).unwrap();

    let edited = session
        .buffer()
        .replace("#ff5f5f", "#ff0000")
        .replace("Title:", "Title:\n  color:\n    fg: '#ffffff'");
    let mut session = Session::new(edited);
    session.reflect(&mut table).unwrap();

    assert_eq!(table.colors_name(), Some("colordinate"));
    let live = extract_current(&mut table).unwrap();
    let error = live.get("Error").unwrap();
    assert_eq!(error.color.as_ref().unwrap().fg.as_deref(), Some("#ff0000"));
    assert_eq!(error.links, vec!["ErrorMsg", "SpellBad"]);
    let title = live.get("Title").unwrap();
    assert_eq!(title.color.as_ref().unwrap().fg.as_deref(), Some("#ffffff"));
    assert!(title.style.contains(Attribute::Underline));

    // reload replaces the whole buffer
    session.load(&mut table).unwrap();
    assert_eq!(scheme::parse(session.buffer()).unwrap(), live);
}

#[test]
fn test_invalid_edit_leaves_host_untouched() {
    let mut table = live_table();
    let before = table.clone();
    let session = Session::new(String::from("Error:\n  style: [blink]\n"));

    let err = session.reflect(&mut table).unwrap_err();
    match err {
        SessionError::Validation(e) => assert_eq!(e.key(), Some("blink")),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(table, before);
}

#[test]
fn test_preview_name_is_configurable() {
    let mut table = HighlightTable::new();
    let session = Session::new(String::from("Normal: {}\n"))
        .with_preview_name("draft")
        .with_render_mode(RenderMode::Gui);
    session.reflect(&mut table).unwrap();
    assert_eq!(table.colors_name(), Some("draft"));
}

#[test]
fn test_jump_finds_group_line() {
    let mut session = Session::new(String::new());
    session.load(&mut live_table()).unwrap();
    let line = session.jump("Error").unwrap().unwrap();
    assert!(session.buffer().lines().nth(line).unwrap().starts_with("Error:"));
    assert_eq!(session.jump("Missing").unwrap(), None);
}

#[test]
fn test_colorscheme_from_session_reapplies_cleanly() {
    let mut session = Session::new(String::new());
    session.load(&mut live_table()).unwrap();
    let content = session.colorscheme("copy").unwrap();

    let mut fresh = HighlightTable::new();
    fresh.execute(&content).unwrap();
    assert_eq!(fresh.colors_name(), Some("copy"));
    assert_eq!(
        extract_current(&mut fresh).unwrap(),
        extract_current(&mut live_table()).unwrap()
    );
}

struct FailingSink;

impl CommandSink for FailingSink {
    fn execute(&mut self, _script: &str) -> Result<(), HostError> {
        Err(HostError::Command("E5555: editor went away".into()))
    }
}

#[test]
fn test_host_failure_surfaces() {
    let session = Session::new(String::from("Normal: {}\n"));
    let err = session.reflect(&mut FailingSink).unwrap_err();
    assert!(matches!(err, SessionError::Host(HostError::Command(_))));
}
