//! Username and e-mail checks used at registration.

use super::ValidationError;
use crate::identity::{is_dangerous_email, is_dangerous_identifier, ReservedNames};

/// Reject names in the reserved set.
pub fn validate_reserved(name: &str, reserved: &ReservedNames) -> Result<(), ValidationError> {
    if reserved.contains(name) {
        tracing::debug!(name, "reserved name rejected");
        return Err(ValidationError::ReservedName);
    }
    Ok(())
}

/// Reject mixed-script confusable names.
pub fn validate_confusables(name: &str) -> Result<(), ValidationError> {
    if is_dangerous_identifier(name) {
        return Err(ValidationError::Confusable);
    }
    Ok(())
}

/// Reject addresses whose local part or domain is a mixed-script confusable.
///
/// Addresses without `@` pass; format checking belongs to the caller.
pub fn validate_confusables_email(address: &str) -> Result<(), ValidationError> {
    if is_dangerous_email(address) {
        return Err(ValidationError::ConfusableEmail);
    }
    Ok(())
}

/// Registration check for a username: reserved first, then confusables.
pub fn validate_username(name: &str, reserved: &ReservedNames) -> Result<(), ValidationError> {
    validate_reserved(name, reserved)?;
    validate_confusables(name)
}

/// Registration check for an e-mail address.
pub fn validate_email(address: &str) -> Result<(), ValidationError> {
    validate_confusables_email(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let reserved = ReservedNames::new();
        assert!(validate_username("ivan_petrov", &reserved).is_ok());
        assert!(validate_username("иван_петров", &reserved).is_ok());
    }

    #[test]
    fn test_reserved_username() {
        let reserved = ReservedNames::new();
        assert_eq!(
            validate_username("localhost", &reserved),
            Err(ValidationError::ReservedName)
        );
    }

    #[test]
    fn test_extension_list_applies() {
        let reserved = ReservedNames::new().with_additional(["moderator"]);
        assert_eq!(
            validate_username("moderator", &reserved),
            Err(ValidationError::ReservedName)
        );
    }

    #[test]
    fn test_confusable_username() {
        let reserved = ReservedNames::new();
        assert_eq!(
            validate_username("p\u{0430}ypal", &reserved),
            Err(ValidationError::Confusable)
        );
    }

    #[test]
    fn test_reserved_checked_before_confusables() {
        let reserved = ReservedNames::new().with_additional(["\u{0430}dmin"]);
        assert_eq!(
            validate_username("\u{0430}dmin", &reserved),
            Err(ValidationError::ReservedName)
        );
    }

    #[test]
    fn test_email() {
        assert!(validate_email("seller@example.com").is_ok());
        assert!(validate_email("not-an-address").is_ok());
        assert_eq!(
            validate_email("seller@ex\u{0430}mple.com"),
            Err(ValidationError::ConfusableEmail)
        );
    }
}
