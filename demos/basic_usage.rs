//! Basic usage example for nglga-rs
//!
//! This example demonstrates how to:
//! - Load the bundled states/LGAs dataset
//! - List states and the LGAs of a state
//! - Find the state that owns an LGA

use nglga_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== nglga-rs Basic Usage Example ===\n");

    println!("Loading dataset...");
    let db = LgaDb::load_from_dir(LgaDb::bundled_data_dir())?;
    let stats = db.stats();
    println!("✓ Loaded {} states with {} LGAs\n", stats.states, stats.lgas);

    // Example 1: List states
    println!("--- Example 1: List states ---");
    let states = db.states();
    for (i, state) in states.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, state);
    }
    println!("... and {} more\n", states.len().saturating_sub(5));

    // Example 2: LGAs of a state, any casing
    println!("--- Example 2: LGAs of \"akwa ibom\" ---");
    for lga in db.lgas("akwa ibom").iter().take(5) {
        println!("- {lga}");
    }
    println!();

    // Example 3: Reverse lookup
    println!("--- Example 3: Which state owns an LGA? ---");
    for lga in ["eti-osa", "NSUKKA", "Bwari", "Atlantis"] {
        match db.find_state_by_lga(lga) {
            Some(state) => println!("  {lga} → {state}"),
            None => println!("  {lga} → not found"),
        }
    }

    Ok(())
}
