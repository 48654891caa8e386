// crates/nglga-core/src/search.rs
use crate::common::DbStats;
use crate::model::{LgaDb, State};
use crate::text::title_case;
use crate::traits::{LgaSearch, NameMatch};

impl LgaSearch for LgaDb {
    fn stats(&self) -> DbStats {
        DbStats {
            states: self.states.len(),
            lgas: self.states.iter().map(|s| s.lgas.len()).sum(),
        }
    }

    fn states(&self) -> Vec<&str> {
        self.states.iter().map(State::name).collect()
    }

    fn find_state(&self, state: &str) -> Option<&State> {
        // Linear scan is fine for 37 entries
        self.states.iter().find(|s| s.is_named(state))
    }

    fn lgas(&self, state: &str) -> &[String] {
        self.find_state(state).map(State::lgas).unwrap_or(&[])
    }

    fn find_state_by_lga(&self, lga: &str) -> Option<&str> {
        let q = title_case(lga);
        for state in &self.states {
            if state.lgas.iter().any(|l| title_case(l) == q) {
                return Some(state.name());
            }
        }
        None
    }
}
