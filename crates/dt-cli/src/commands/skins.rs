use comfy_table::{ContentArrangement, Table};
use dt_profile::{DiceSkin, KvStore, Rarity, starter_skins};

fn parse_rarity(s: &str) -> Result<Rarity, String> {
    match s.to_lowercase().as_str() {
        "common" => Ok(Rarity::Common),
        "rare" => Ok(Rarity::Rare),
        "epic" => Ok(Rarity::Epic),
        "legendary" => Ok(Rarity::Legendary),
        other => Err(format!("unknown rarity: {other}")),
    }
}

pub fn run(store: &KvStore, rarity: Option<&str>) -> Result<(), String> {
    let book = super::load_profiles(store)?;
    // Without a profile, show the starter collection.
    let skins: Vec<DiceSkin> = match book.current() {
        Some(profile) => profile.skins.clone(),
        None => starter_skins(),
    };

    let filter = rarity.map(parse_rarity).transpose()?;
    let skins: Vec<&DiceSkin> = skins
        .iter()
        .filter(|s| filter.is_none_or(|r| s.rarity == r))
        .collect();

    if skins.is_empty() {
        println!("  No skins match.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Rarity", "Material", "Color", "Equipped"]);
    for skin in skins {
        table.add_row(vec![
            skin.name.clone(),
            skin.rarity.to_string(),
            skin.material.clone(),
            skin.color.clone(),
            if skin.equipped { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
