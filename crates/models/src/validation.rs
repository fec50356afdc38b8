//! Payload validation shared by the service layer.

use crate::errors::ModelError;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("\"{field}\" is not allowed to be empty")));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> Result<(), ModelError> {
    if !(1..=9999).contains(&year) {
        return Err(ModelError::Validation("\"year\" must be a valid year".into()));
    }
    Ok(())
}

pub fn validate_duration(duration: Option<i32>) -> Result<(), ModelError> {
    match duration {
        Some(d) if d < 0 => Err(ModelError::Validation("\"duration\" must be a positive number".into())),
        _ => Ok(()),
    }
}

/// Minimal structural email check: one `@`, non-empty local part, dotted domain.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    let invalid = || ModelError::Validation("\"targetEmail\" must be a valid email".into());
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("a.b@mail.co.id").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("user@@example.com").is_err());
        assert!(validate_email("us er@example.com").is_err());
    }

    #[test]
    fn year_and_duration_bounds() {
        assert!(validate_year(2008).is_ok());
        assert!(validate_year(0).is_err());
        assert!(validate_duration(None).is_ok());
        assert!(validate_duration(Some(120)).is_ok());
        assert!(validate_duration(Some(-1)).is_err());
    }

    #[test]
    fn blank_strings_rejected() {
        assert!(require_non_empty("name", "  ").is_err());
        assert!(require_non_empty("name", "Viva la Vida").is_ok());
    }
}
