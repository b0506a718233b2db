//! Integration tests for live extraction against an in-memory highlight table

mod common;

use colordinate::host::{
    extract_current, CommandSink, Extractor, HighlightEntry, HighlightHost, HighlightTable,
    RenderMode,
};
use colordinate::scheme::{self, Attribute, Color, ConfigModel};
use common::{palette_model, sample_model, CountingHost};

fn apply(model: &ConfigModel) -> HighlightTable {
    let mut table = HighlightTable::new();
    table
        .execute(&scheme::to_script(model))
        .expect("generated script should apply");
    table
}

// ========================================================================
// Inverse of the script generator
// ========================================================================

#[test]
fn test_extract_inverts_script_for_sample() {
    let model = sample_model();
    let extracted = extract_current(&mut apply(&model)).unwrap();
    assert_eq!(extracted, model);
}

#[test]
fn test_extract_inverts_script_for_palette() {
    let model = palette_model();
    let extracted = extract_current(&mut apply(&model)).unwrap();

    for (name, group) in model.iter() {
        let got = extracted
            .get(name)
            .unwrap_or_else(|| panic!("missing group {}", name));
        assert_eq!(got.style, group.style, "style of {}", name);
        assert_eq!(got.links, group.links, "links of {}", name);
        assert_eq!(
            got.color.clone().unwrap_or_default(),
            group.color.clone().unwrap_or_default(),
            "color of {}",
            name
        );
    }
    assert_eq!(extracted.len(), model.len());
}

#[test]
fn test_reapplying_extracted_model_is_stable() {
    let first = extract_current(&mut apply(&palette_model())).unwrap();
    let second = extract_current(&mut apply(&first)).unwrap();
    assert_eq!(first, second);
    assert_eq!(scheme::to_document(&first), scheme::to_document(&second));
}

// ========================================================================
// Termination and query discipline
// ========================================================================

#[test]
fn test_visits_exactly_known_ids() {
    let table = apply(&sample_model());
    let known = table.len() as u32;
    let mut host = CountingHost::new(table);
    extract_current(&mut host).unwrap();

    let translated: Vec<_> = host
        .queries
        .iter()
        .filter(|(_, key)| key.is_none())
        .map(|(id, _)| *id)
        .collect();
    assert_eq!(translated, (1..=known + 1).collect::<Vec<_>>());
    assert!(!host.detail_ids().contains(&(known + 1)));
}

#[test]
fn test_empty_table_yields_empty_model() {
    let model = extract_current(&mut HighlightTable::new()).unwrap();
    assert!(model.is_empty());
}

#[test]
fn test_unused_slots_are_skipped() {
    let mut table = HighlightTable::from_entries(vec![
        HighlightEntry::named(""),
        HighlightEntry {
            name: "Normal".into(),
            fg: Some("#ffffff".into()),
            ..HighlightEntry::default()
        },
        HighlightEntry::named(""),
    ]);
    let model = extract_current(&mut table).unwrap();
    let names: Vec<_> = model.names().collect();
    assert_eq!(names, vec!["Normal"]);
}

// ========================================================================
// Alias resolution
// ========================================================================

#[test]
fn test_alias_resolves_to_canonical_record() {
    let mut entries: Vec<_> = (1..=9).map(|_| HighlightEntry::named("")).collect();
    entries[4] = HighlightEntry::named("Normal");
    entries[8] = HighlightEntry {
        name: "Visual".into(),
        link: Some("Normal".into()),
        ..HighlightEntry::default()
    };
    let mut table = HighlightTable::from_entries(entries);

    let model = extract_current(&mut table).unwrap();
    assert_eq!(model.len(), 1);
    assert_eq!(model.get("Normal").unwrap().links, vec!["Visual"]);
    assert!(!model.contains("Visual"));
    let doc = scheme::to_document(&model);
    assert!(!doc.contains("color"), "{}", doc);
    assert_eq!(scheme::parse(&doc).unwrap(), model);
}

#[test]
fn test_multi_hop_link_attaches_to_final_group() {
    let mut table = HighlightTable::new();
    table
        .execute("hi! link A B\nhi! link B C\nhi! C guifg=red guibg=None gui=NONE")
        .unwrap();
    let model = extract_current(&mut table).unwrap();

    let names: Vec<_> = model.names().collect();
    assert_eq!(names, vec!["C"]);
    assert_eq!(model.get("C").unwrap().links, vec!["A", "B"]);
}

// ========================================================================
// Snapshots and render modes
// ========================================================================

#[test]
fn test_snapshot_to_document() {
    let json = r##"[
        {"name": "Normal", "fg": "#ffffff", "bg": "#000000"},
        {"name": "Comment", "fg": "#888888", "style": ["italic"]},
        {"name": "SpecialComment", "link": "Comment"}
    ]"##;
    let mut table = HighlightTable::from_snapshot_json(json).unwrap();
    let model = Extractor::with_mode(RenderMode::Cterm)
        .extract(&mut table)
        .unwrap();
    assert_eq!(model, sample_model());
}

#[test]
fn test_canonical_without_colors_has_no_color_field() {
    let mut table = HighlightTable::from_entries(vec![HighlightEntry {
        name: "Title".into(),
        style: [Attribute::Bold].into_iter().collect(),
        ..HighlightEntry::default()
    }]);
    let model = extract_current(&mut table).unwrap();
    let title = model.get("Title").unwrap();
    assert_eq!(title.color, None);
    assert_eq!(title.style.join(","), "bold");
}

#[test]
fn test_background_only_color() {
    let mut table = HighlightTable::from_entries(vec![HighlightEntry {
        name: "Visual".into(),
        bg: Some("#3a3a3a".into()),
        ..HighlightEntry::default()
    }]);
    let model = extract_current(&mut table).unwrap();
    assert_eq!(
        model.get("Visual").unwrap().color,
        Some(Color::new(None, Some("#3a3a3a")))
    );
}

#[test]
fn test_translate_past_end_is_none() {
    let mut table = apply(&sample_model());
    let past = table.len() as u32 + 1;
    assert_eq!(table.translate(past).unwrap(), None);
    assert_eq!(table.translate(0).unwrap(), None);
}
