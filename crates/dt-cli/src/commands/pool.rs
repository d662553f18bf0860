use comfy_table::{ContentArrangement, Table};
use dt_engine::{DicePool, Die};
use dt_profile::KvStore;

pub fn show(store: &KvStore) -> Result<(), String> {
    let dice = super::load_pool(store)?.unwrap_or_default();
    if dice.is_empty() {
        println!("  The tray is empty.");
        return Ok(());
    }

    let pool = DicePool::from_dice(dice, None);
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Die", "Showing"]);
    for (i, die) in pool.dice().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            die.die.to_string(),
            die.value().to_string(),
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} dice, showing {}", pool.len(), pool.total());
    Ok(())
}

pub fn add(store: &KvStore, die: &str) -> Result<(), String> {
    let die = Die::parse(die).map_err(|e| e.to_string())?;
    let mut dice = super::load_pool(store)?.unwrap_or_default();
    dice.push(die);
    super::save_pool(store, &dice)?;
    println!("Added {die}. The tray holds {} dice.", dice.len());
    Ok(())
}

pub fn remove(store: &KvStore, position: usize) -> Result<(), String> {
    let mut dice = super::load_pool(store)?.unwrap_or_default();
    if position == 0 || position > dice.len() {
        return Err(format!(
            "no die at position {position}; the tray holds {} dice",
            dice.len()
        ));
    }
    let removed = dice.remove(position - 1);
    super::save_pool(store, &dice)?;
    println!("Removed {removed}. The tray holds {} dice.", dice.len());
    Ok(())
}

pub fn clear(store: &KvStore) -> Result<(), String> {
    super::save_pool(store, &[])?;
    println!("Cleared the tray.");
    Ok(())
}
