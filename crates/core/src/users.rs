//! Registration input validation.

/// Maximum length of a display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validate a display name: non-empty after trimming, within the length limit.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name must not be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an email address.
///
/// Intentionally loose: requires a single `@` with non-empty local part and
/// a domain containing a dot. Deliverability is the mail system's problem;
/// this only rejects obviously malformed input before it reaches the store.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        ));
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None)
            if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') =>
        {
            Ok(())
        }
        _ => Err(format!("'{email}' is not a valid email address")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_email("ada@example.com").is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for bad in ["", "no-at-sign", "@example.com", "two@@example.com", "a@b"] {
            assert!(validate_email(bad).is_err(), "should reject '{bad}'");
        }
    }
}
