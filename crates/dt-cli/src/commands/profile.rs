use comfy_table::{ContentArrangement, Table};
use dt_profile::{DiceProfile, KvStore, starter_skins};

pub fn list(store: &KvStore) -> Result<(), String> {
    let book = super::load_profiles(store)?;
    if book.profiles().is_empty() {
        println!("  No profiles yet. Create one with `dicetray profile create <name>`.");
        return Ok(());
    }

    let current = book.current().map(|p| p.id);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Name", "Color", "Skins", "Equipped"]);
    for profile in book.profiles() {
        let marker = if Some(profile.id) == current { "*" } else { "" };
        let equipped = profile
            .equipped()
            .map_or_else(|| "-".to_string(), |s| s.name.clone());
        table.add_row(vec![
            marker.to_string(),
            profile.name.clone(),
            profile.color.clone(),
            profile.skins.len().to_string(),
            equipped,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn create(store: &KvStore, name: &str, color: &str) -> Result<(), String> {
    let mut book = super::load_profiles(store)?;
    if book.find_by_name(name).is_some() {
        return Err(format!("a profile named \"{name}\" already exists"));
    }
    book.add(DiceProfile::new(name, starter_skins(), color));
    super::save_profiles(store, &book)?;
    println!("Created and selected profile \"{name}\".");
    Ok(())
}

pub fn select(store: &KvStore, name: &str) -> Result<(), String> {
    let mut book = super::load_profiles(store)?;
    let id = book
        .find_by_name(name)
        .map(|p| p.id)
        .ok_or_else(|| format!("no profile named \"{name}\""))?;
    book.select(id).map_err(|e| e.to_string())?;
    super::save_profiles(store, &book)?;
    println!("Selected profile \"{name}\".");
    Ok(())
}

pub fn delete(store: &KvStore, name: &str) -> Result<(), String> {
    let mut book = super::load_profiles(store)?;
    let id = book
        .find_by_name(name)
        .map(|p| p.id)
        .ok_or_else(|| format!("no profile named \"{name}\""))?;
    book.delete(id).map_err(|e| e.to_string())?;
    super::save_profiles(store, &book)?;
    println!("Deleted profile \"{name}\".");
    Ok(())
}
