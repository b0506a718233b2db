//! Shared helpers for benchmarks

use colordinate::host::HighlightTable;
use colordinate::scheme::{Attribute, ConfigModel, GroupConfig};

/// Build a model with `groups` canonical groups, every third one carrying aliases
pub fn make_model(groups: usize) -> ConfigModel {
    (0..groups)
        .map(|i| {
            let attrs: Vec<Attribute> = Attribute::ALL
                .iter()
                .copied()
                .enumerate()
                .filter(|(bit, _)| (i >> bit) & 1 == 1)
                .map(|(_, attr)| attr)
                .collect();
            let fg = format!("#{:06x}", (i * 0x1f3d5b) & 0xffffff);
            let bg = (i % 2 == 0).then(|| format!("#{:06x}", (i * 0x0a0b0c) & 0xffffff));
            let mut group = GroupConfig::default()
                .with_color(Some(&fg), bg.as_deref())
                .with_style(attrs);
            if i % 3 == 0 {
                group = group.with_links([format!("Alias{}A", i), format!("Alias{}B", i)]);
            }
            (format!("Group{}", i), group)
        })
        .collect()
}

/// A highlight table holding `model`
#[allow(dead_code)]
pub fn make_table(model: &ConfigModel) -> HighlightTable {
    use colordinate::host::CommandSink;

    let mut table = HighlightTable::new();
    if let Err(e) = table.execute(&colordinate::scheme::to_script(model)) {
        panic!("benchmark script failed to apply: {}", e);
    }
    table
}
