//! Display masking for emails and credit card numbers.
//!
//! Maskers only accept raw matches. Feeding an already-masked value back in is
//! not supported.

use crate::error::{Error, Result};
use crate::extract::Category;

/// Prefix placed in front of the last four digits of a masked card.
pub const CARD_MASK_PREFIX: &str = "**** **** **** ";

/// Mask the local part of an email address.
///
/// Local parts of one or two characters become all `*`. Longer ones keep their
/// first and last character with `*` in between. The domain is untouched.
///
/// ```
/// use textsieve::mask::mask_email;
///
/// assert_eq!(mask_email("joe@test.com").unwrap(), "j*e@test.com");
/// assert_eq!(mask_email("ab@x.com").unwrap(), "**@x.com");
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] unless the value has exactly one `@`
/// preceded by a non-empty local part.
pub fn mask_email(email: &str) -> Result<String> {
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| Error::malformed_input(Category::Email, email, "missing '@'"))?;
    if domain.contains('@') {
        return Err(Error::malformed_input(
            Category::Email,
            email,
            "more than one '@'",
        ));
    }

    let len = local.chars().count();
    let masked_local = match len {
        0 => {
            return Err(Error::malformed_input(
                Category::Email,
                email,
                "empty local part",
            ))
        }
        1 | 2 => "*".repeat(len),
        _ => {
            let mut chars = local.chars();
            let first = chars.next().unwrap_or_default();
            let last = chars.next_back().unwrap_or_default();
            format!("{first}{}{last}", "*".repeat(len - 2))
        }
    };

    Ok(format!("{masked_local}@{domain}"))
}

/// Mask a credit card number down to its last four digits.
///
/// ```
/// use textsieve::mask::mask_credit_card;
///
/// assert_eq!(
///     mask_credit_card("1234-5678-9012-3456").unwrap(),
///     "**** **** **** 3456"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the value has fewer than four digits.
pub fn mask_credit_card(card: &str) -> Result<String> {
    let digits: Vec<char> = card.chars().filter(|c| c.is_numeric()).collect();
    if digits.len() < 4 {
        return Err(Error::malformed_input(
            Category::CreditCard,
            card,
            "fewer than 4 digits",
        ));
    }

    let last_four: String = digits[digits.len() - 4..].iter().collect();
    Ok(format!("{CARD_MASK_PREFIX}{last_four}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_long_local() {
        assert_eq!(mask_email("joe@test.com").unwrap(), "j*e@test.com");
        assert_eq!(
            mask_email("john.smith@example.org").unwrap(),
            "j********h@example.org"
        );
    }

    #[test]
    fn test_mask_email_short_local() {
        assert_eq!(mask_email("j@a.com").unwrap(), "*@a.com");
        assert_eq!(mask_email("ab@x.com").unwrap(), "**@x.com");
    }

    #[test]
    fn test_mask_email_keeps_ends() {
        let original = "alice_w@mail.io";
        let masked = mask_email(original).unwrap();
        let local = masked.split('@').next().unwrap();
        assert_eq!(local.len(), 7);
        assert!(local.starts_with('a'));
        assert!(local.ends_with('w'));
        assert!(local[1..6].chars().all(|c| c == '*'));
    }

    #[test]
    fn test_mask_email_missing_at() {
        let err = mask_email("no-at-sign").unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("missing '@'"));
    }

    #[test]
    fn test_mask_email_rejects_multiple_at() {
        assert!(mask_email("a@b@c.com").unwrap_err().is_malformed_input());
    }

    #[test]
    fn test_mask_email_rejects_empty_local() {
        assert!(mask_email("@c.com").unwrap_err().is_malformed_input());
    }

    #[test]
    fn test_mask_credit_card_separators() {
        for card in [
            "1234-5678-9012-3456",
            "1234 5678 9012 3456",
            "1234567890123456",
        ] {
            assert_eq!(mask_credit_card(card).unwrap(), "**** **** **** 3456");
        }
    }

    #[test]
    fn test_mask_credit_card_hides_other_digits() {
        let masked = mask_credit_card("9876-5432-1098-7654").unwrap();
        let digits: String = masked.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, "7654");
        assert!(masked.ends_with("7654"));
    }

    #[test]
    fn test_mask_credit_card_too_short() {
        let err = mask_credit_card("12-3").unwrap_err();
        assert!(err.is_malformed_input());
    }
}
