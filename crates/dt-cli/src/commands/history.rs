use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dt_engine::{Classification, Die, RollOutcome};
use dt_profile::KvStore;
use dt_profile::store::KEY_HISTORY;

pub fn show(store: &KvStore, die: Option<&str>, limit: Option<usize>) -> Result<(), String> {
    let ledger = super::load_ledger(store)?;

    let filter = die.map(Die::parse).transpose().map_err(|e| e.to_string())?;
    let outcomes: Vec<&RollOutcome> = match filter {
        Some(die) => ledger.filtered_by(die),
        None => ledger.outcomes().iter().collect(),
    };

    if outcomes.is_empty() {
        println!("  No rolls recorded.");
        return Ok(());
    }

    // Most recent last; a limit keeps the tail.
    let skip = limit.map_or(0, |n| outcomes.len().saturating_sub(n));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Dice", "Values", "Total", "Result", "Label"]);
    for outcome in &outcomes[skip..] {
        let dice: Vec<String> = outcome.dice.iter().map(|s| s.die.to_string()).collect();
        let values: Vec<String> = outcome.dice.iter().map(|s| s.value.to_string()).collect();
        let result = match outcome.result {
            Classification::Critical => "Critical!".bright_green().to_string(),
            Classification::Fumble => "Fumble".bright_red().to_string(),
            Classification::None => "-".to_string(),
        };
        table.add_row(vec![
            outcome.timestamp.format("%H:%M:%S").to_string(),
            dice.join(" "),
            values.join(", "),
            outcome.total.to_string(),
            result,
            outcome.label.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} of {} rolls", outcomes.len() - skip, ledger.total_rolls());
    Ok(())
}

pub fn reset(store: &KvStore) -> Result<(), String> {
    store.remove(KEY_HISTORY).map_err(|e| e.to_string())?;
    println!("History and stats reset.");
    Ok(())
}
