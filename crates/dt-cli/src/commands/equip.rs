use dt_profile::KvStore;

pub fn run(store: &KvStore, name: &str) -> Result<(), String> {
    let mut book = super::load_profiles(store)?;
    let mut profile = book
        .current()
        .cloned()
        .ok_or_else(|| {
            "no profile selected; create one with `dicetray profile create <name>`".to_string()
        })?;

    let skin_id = profile
        .skins
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .map(|s| s.id)
        .ok_or_else(|| format!("no skin named \"{name}\" in profile \"{}\"", profile.name))?;

    profile.equip(skin_id).map_err(|e| e.to_string())?;
    let profile_name = profile.name.clone();
    book.update(profile).map_err(|e| e.to_string())?;
    super::save_profiles(store, &book)?;
    println!("Equipped \"{name}\" on profile \"{profile_name}\".");
    Ok(())
}
