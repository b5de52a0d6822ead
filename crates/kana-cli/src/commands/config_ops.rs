use std::fs;

use kana_core::romaji::{parse_romaji_toml, RomajiTable};
use kana_core::settings::parse_settings_toml;

pub fn romaji_export() {
    print!("{}", kana_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let rules = die!(parse_romaji_toml(&content), "Error: {}");
    let table = die!(RomajiTable::from_rules(rules), "Error: {}");
    println!(
        "OK: {} rules, longest key {} letters",
        table.len(),
        table.longest_key()
    );
}

pub fn settings_export() {
    print!("{}", kana_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: field={}x{}, enemies.max={}, enemies.speed={}, scoring.points_per_kill={}",
        s.field.width, s.field.height, s.enemies.max, s.enemies.speed, s.scoring.points_per_kill
    );
}

/// Install custom rule and settings files before anything reads the globals.
pub fn init_custom_config(romaji: Option<&str>, settings: Option<&str>) {
    if let Some(file) = romaji {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(RomajiTable::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            kana_core::settings::init_custom(content),
            "Error in {file}: {}"
        );
    }
}
