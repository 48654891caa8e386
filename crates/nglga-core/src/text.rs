// crates/nglga-core/src/text.rs

//! Name normalization used by every case-insensitive lookup.
//!
//! State and LGA names are compared on their *title-cased* form: a cased
//! character is uppercased when it starts the string or follows a
//! non-alphabetic character (space, hyphen, apostrophe, digit, ...), and
//! lowercased everywhere else.
//!
//! | input        | title case   |
//! |--------------|--------------|
//! | `lagos`      | `Lagos`      |
//! | `AKWA IBOM`  | `Akwa Ibom`  |
//! | `eti-osa`    | `Eti-Osa`    |
//! | `Eti-osa`    | `Eti-Osa`    |
//! | `fct`        | `Fct`        |
//!
//! The rule is applied to both sides of a comparison, so a stored name such
//! as `FCT` still matches the query `fct`.

/// Convert `s` to title case.
///
/// # Examples
/// ```rust
/// use nglga_core::text::title_case;
///
/// assert_eq!(title_case("ifako-ijaiye"), "Ifako-Ijaiye");
/// assert_eq!(title_case("OBI NGWA"), "Obi Ngwa");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if prev_alpha {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_alpha = ch.is_alphabetic();
    }
    out
}

/// `true` when `a` and `b` are equal after [`title_case`].
#[inline]
pub fn equals_title(a: &str, b: &str) -> bool {
    // Fast path: identical strings need no allocation.
    a == b || title_case(a) == title_case(b)
}
