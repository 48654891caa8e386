//! Checks against the dataset shipped in `crates/nglga-core/data`.

use nglga_core::{LgaDb, LgaSearch};
use std::collections::HashMap;

fn bundled() -> LgaDb {
    LgaDb::load_from_dir(LgaDb::bundled_data_dir()).expect("bundled dataset loads")
}

#[test]
fn has_thirty_six_states_and_the_fct() {
    let db = bundled();
    let states = db.states();
    assert_eq!(states.len(), 37);
    assert!(states.contains(&"FCT"));
    assert!(states.contains(&"Lagos"));
    assert!(states.contains(&"Zamfara"));
}

#[test]
fn every_state_has_lgas() {
    let db = bundled();
    for state in db.states() {
        assert!(!db.lgas(state).is_empty(), "{state} has no LGAs");
    }
    assert_eq!(db.stats().states, 37);
}

#[test]
fn lgas_lookup_ignores_case() {
    let db = bundled();
    for q in ["lagos", "LAGOS", "Lagos"] {
        let lgas = db.lgas(q);
        assert!(lgas.iter().any(|l| l == "Ikeja"));
        assert!(lgas.iter().any(|l| l == "Eti-Osa"));
    }
    assert!(db.lgas("cross river").iter().any(|l| l == "Calabar South"));
    assert!(db.lgas("fct").iter().any(|l| l == "Bwari"));
    assert!(db.lgas("NotAState").is_empty());
}

#[test]
fn every_unique_lga_maps_back_to_its_state() {
    let db = bundled();

    // Some LGA names are shared between states (e.g. Surulere in Lagos and
    // Oyo); only unique names have a single answer.
    let mut owners: HashMap<String, Vec<&str>> = HashMap::new();
    for (state, lga) in db.pairs() {
        owners
            .entry(nglga_core::text::title_case(lga))
            .or_default()
            .push(state);
    }

    for (state, lga) in db.pairs() {
        let found = db.find_state_by_lga(lga);
        if owners[&nglga_core::text::title_case(lga)].len() == 1 {
            assert_eq!(found, Some(state), "{lga}");
            assert_eq!(db.find_state_by_lga(&lga.to_uppercase()), Some(state));
            assert_eq!(db.find_state_by_lga(&lga.to_lowercase()), Some(state));
        } else {
            assert!(found.is_some(), "{lga}");
        }
    }
}

#[test]
fn shared_lga_names_resolve_to_the_first_state() {
    let db = bundled();
    assert_eq!(db.find_state_by_lga("surulere"), Some("Lagos"));
    assert_eq!(db.find_state_by_lga("Obi"), Some("Benue"));
    assert_eq!(db.find_state_by_lga("NotAnLGA"), None);
}
