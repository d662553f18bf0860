use comfy_table::{ContentArrangement, Table};
use dt_profile::store::KEY_SETTINGS;
use dt_profile::{KvStore, Settings};

fn load(store: &KvStore) -> Result<Settings, String> {
    Ok(store
        .get(KEY_SETTINGS)
        .map_err(|e| e.to_string())?
        .unwrap_or_default())
}

fn save(store: &KvStore, settings: &Settings) -> Result<(), String> {
    store.set(KEY_SETTINGS, settings).map_err(|e| e.to_string())
}

pub fn show(store: &KvStore) -> Result<(), String> {
    let s = load(store)?;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["sound".to_string(), s.sound.to_string()]);
    table.add_row(vec!["haptics".to_string(), s.haptics.to_string()]);
    table.add_row(vec!["shake_to_roll".to_string(), s.shake_to_roll.to_string()]);
    table.add_row(vec!["gravity".to_string(), s.gravity.to_string()]);
    table.add_row(vec!["bounce".to_string(), s.bounce.to_string()]);
    println!("{table}");
    Ok(())
}

pub fn set(store: &KvStore, key: &str, value: &str) -> Result<(), String> {
    let mut s = load(store)?;
    match key {
        "sound" => s.sound = parse_bool(value)?,
        "haptics" => s.haptics = parse_bool(value)?,
        "shake_to_roll" => s.shake_to_roll = parse_bool(value)?,
        "gravity" => s.set_gravity(parse_slider(value)?),
        "bounce" => s.set_bounce(parse_slider(value)?),
        other => return Err(format!("unknown setting: {other}")),
    }
    save(store, &s)?;
    println!("Set {key} = {value}.");
    Ok(())
}

pub fn reset(store: &KvStore) -> Result<(), String> {
    save(store, &Settings::default())?;
    println!("Settings reset to defaults.");
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        other => Err(format!("expected on/off, got: {other}")),
    }
}

fn parse_slider(value: &str) -> Result<u8, String> {
    value
        .parse()
        .map_err(|_| format!("expected a number 0-100, got: {value}"))
}
