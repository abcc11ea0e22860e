//! Registration input validation
//!
//! Structural checks only; the banking core performs its own
//! defense-in-depth validation regardless of what passes here.

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Structural email check: one `@`, a non-empty local part, and a domain
/// containing at least one dot with non-empty labels
pub fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && !trimmed.contains(char::is_whitespace)
}

/// Returns true if the trimmed password meets the minimum length
pub fn is_valid_password(password: &str) -> bool {
    password.trim().len() >= MIN_PASSWORD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+tag@mail.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@nodot"));
        assert!(!is_valid_email("ada@example."));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("a da@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(is_valid_password("123456"));
        assert!(!is_valid_password("12345"));
        assert!(!is_valid_password("  1234  "));
    }
}
