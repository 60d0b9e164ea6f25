//! Candidate registration numbers (inscrição)
//!
//! Every sheet identifies candidates by a 12-digit number that starts with
//! the fixed prefix `2500`. It is the join key across all three sheets.

use once_cell::sync::Lazy;
use regex::Regex;

static REGISTRATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^2500\d{8}$").expect("registration pattern is valid")
});

/// Check whether a trimmed value is a registration number
pub fn is_registration(value: &str) -> bool {
    REGISTRATION.is_match(value)
}
