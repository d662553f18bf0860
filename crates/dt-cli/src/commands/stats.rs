use comfy_table::{ContentArrangement, Table};
use dt_profile::KvStore;

/// Chart boundaries matching the product's session-stats view.
const DEFAULT_BOUNDARIES: [u32; 4] = [5, 10, 15, 19];

pub fn run(store: &KvStore, buckets: Option<&str>) -> Result<(), String> {
    let ledger = super::load_ledger(store)?;
    let stats = ledger.stats();

    println!("  Rolls: {}", stats.rolls);
    println!("  Criticals: {}", stats.criticals);
    println!("  Fumbles: {}", stats.fumbles);
    if stats.rolls > 0 {
        let average = stats.grand_total as f64 / stats.rolls as f64;
        println!("  Average total: {average:.1}");
    }
    println!();

    let boundaries: Vec<u32> = match buckets {
        Some(raw) => raw
            .split(',')
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|_| format!("invalid bucket boundary: {s}"))
            })
            .collect::<Result<_, _>>()?,
        None => DEFAULT_BOUNDARIES.to_vec(),
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Range", "Rolls"]);
    for bucket in ledger.bucketed_frequencies(&boundaries) {
        table.add_row(vec![bucket.label, bucket.count.to_string()]);
    }
    println!("{table}");
    Ok(())
}
