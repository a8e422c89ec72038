//! Content validators that map text to a [`ValidationState`].

use crate::field::ValidationState;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email pattern is valid")
});

/// Whether `text` looks like an email address.
pub fn is_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Validation state for an email field: neutral while empty, then valid or
/// invalid depending on the address shape.
pub fn email_state(text: &str) -> ValidationState {
    if text.is_empty() {
        ValidationState::None
    } else if is_email(text) {
        ValidationState::Valid
    } else {
        ValidationState::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_neutral() {
        assert_eq!(email_state(""), ValidationState::None);
    }

    #[test]
    fn accepts_common_addresses() {
        for addr in ["jane@example.com", "j.doe+news@mail.example.co.uk", "A_B%c@x.io"] {
            assert_eq!(email_state(addr), ValidationState::Valid, "{addr}");
        }
    }

    #[test]
    fn rejects_partial_addresses() {
        for addr in ["jane", "jane@", "jane@example", "@example.com", "jane@example.c", "ja ne@example.com"] {
            assert_eq!(email_state(addr), ValidationState::Invalid, "{addr}");
        }
    }

    #[test]
    fn whole_string_must_match() {
        assert!(!is_email("jane@example.com trailing"));
        assert!(!is_email(" jane@example.com"));
    }
}
