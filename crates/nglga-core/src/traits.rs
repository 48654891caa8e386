// crates/nglga-core/src/traits.rs
use crate::common::DbStats;
use crate::model::State;
use crate::text::equals_title;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`] and get [`NameMatch::is_named`], which compares
/// on the title-cased form (see [`crate::text`]).
///
/// # Examples
/// ```rust
/// use nglga_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Akwa Ibom").is_named("AKWA IBOM"));
/// assert!(!Place("Akwa Ibom").is_named("akwa"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive exact comparison on the title-cased form.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_title(self.name_str(), q)
    }
}

/// The query surface of the database.
///
/// Absence is a value here, never an error: unknown states give an empty
/// slice and unknown LGAs give `None`.
pub trait LgaSearch {
    fn stats(&self) -> DbStats;

    /// All state names, in the key order of the source document.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nglga_core::{LgaDb, LgaSearch};
    ///
    /// let db = LgaDb::load().unwrap();
    /// for state in db.states() {
    ///     println!("{state}");
    /// }
    /// ```
    fn states(&self) -> Vec<&str>;

    /// The state record whose name matches `state` case-insensitively.
    fn find_state(&self, state: &str) -> Option<&State>;

    /// LGAs of `state` (case-insensitive) in stored order.
    ///
    /// Returns an empty slice for an unknown state, so "unknown" and "state
    /// without LGAs" look the same through this call.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nglga_core::{LgaDb, LgaSearch};
    ///
    /// let db = LgaDb::load().unwrap();
    /// assert!(db.lgas("LAGOS").iter().any(|l| l == "Ikeja"));
    /// assert!(db.lgas("Atlantis").is_empty());
    /// ```
    fn lgas(&self, state: &str) -> &[String];

    /// The state owning `lga` (case-insensitive exact match), or `None`.
    ///
    /// States are scanned in source order and the first match wins.
    fn find_state_by_lga(&self, lga: &str) -> Option<&str>;
}
