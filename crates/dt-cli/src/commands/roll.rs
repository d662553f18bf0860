use colored::Colorize;
use dt_engine::{Classification, Die, EngineConfig, RollerSession};
use dt_profile::KvStore;

/// Dice the product seeds a fresh tray with.
const DEFAULT_POOL: [Die; 2] = [Die::D20, Die::D6];

pub fn run(
    store: &KvStore,
    dice: &[String],
    label: Option<&str>,
    seed: Option<u64>,
    keep_pool: bool,
) -> Result<(), String> {
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = RollerSession::new(config);

    // An explicit dice list replaces the saved pool; otherwise reuse it.
    let pool: Vec<Die> = if dice.is_empty() {
        super::load_pool(store)?.unwrap_or_else(|| DEFAULT_POOL.to_vec())
    } else {
        dice.iter()
            .map(|s| Die::parse(s).map_err(|e| e.to_string()))
            .collect::<Result<_, _>>()?
    };
    session.restore_pool(pool).map_err(|e| e.to_string())?;

    let saved = super::load_ledger(store)?;
    session.restore_history(saved.outcomes().to_vec());

    let outcome = match label {
        Some(label) => session.roll_labeled(label),
        None => session.roll(),
    }
    .map_err(|e| e.to_string())?;

    for snap in &outcome.dice {
        println!("  {} \u{2192} {}", snap.die, snap.value);
    }
    match outcome.result {
        Classification::Critical => {
            println!("Total: {} {}", outcome.total, "CRITICAL!".bright_green().bold());
        }
        Classification::Fumble => {
            println!("Total: {} {}", outcome.total, "FUMBLE".bright_red().bold());
        }
        Classification::None => println!("Total: {}", outcome.total),
    }

    // A one-off roll with --keep-pool leaves the saved tray alone.
    if !keep_pool {
        super::save_pool(store, &session.pool().die_types())?;
    }
    super::save_history(store, session.ledger().outcomes())?;
    Ok(())
}
