//! Input validation for account registration and listing submission.
//!
//! Thin `Result`-returning wrappers over [`crate::profanity`] and
//! [`crate::identity`]. A rejection carries the message shown to the end
//! user; the HTTP sidecar and the CLI print it as is.
//!
//! | Check                          | Rejection                       |
//! |--------------------------------|---------------------------------|
//! | [`validate_reserved`]          | [`ValidationError::ReservedName`] |
//! | [`validate_confusables`]       | [`ValidationError::Confusable`]   |
//! | [`validate_confusables_email`] | [`ValidationError::ConfusableEmail`] |
//! | [`validate_listing_text`]      | [`ValidationError::Profanity`]    |

mod account;
mod listing;

use thiserror::Error;

pub use account::{
    validate_confusables, validate_confusables_email, validate_email, validate_reserved,
    validate_username,
};
pub use listing::{validate_listing_attributes, validate_listing_text, ListingDraft};

/// A rejected user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is in the reserved set.
    #[error("This name is reserved and cannot be registered.")]
    ReservedName,

    /// Name is a mixed-script confusable.
    #[error("This name cannot be registered. Please choose a different name.")]
    Confusable,

    /// E-mail local part or domain is a mixed-script confusable.
    #[error("This email address cannot be registered. Please supply a different email address.")]
    ConfusableEmail,

    /// Listing field contains prohibited language.
    #[error("{field}: Не корректные данные")]
    Profanity {
        /// Field (or attribute key) that was rejected.
        field: String,
    },
}

impl ValidationError {
    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ReservedName => "reserved_name",
            ValidationError::Confusable => "confusable",
            ValidationError::ConfusableEmail => "confusable_email",
            ValidationError::Profanity { .. } => "profanity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::ReservedName.to_string(),
            "This name is reserved and cannot be registered."
        );
        assert_eq!(
            ValidationError::Confusable.to_string(),
            "This name cannot be registered. Please choose a different name."
        );
        assert_eq!(
            ValidationError::ConfusableEmail.to_string(),
            "This email address cannot be registered. Please supply a different email address."
        );
        assert_eq!(
            ValidationError::Profanity {
                field: "description".to_string()
            }
            .to_string(),
            "description: Не корректные данные"
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(ValidationError::ReservedName.code(), "reserved_name");
        assert_eq!(ValidationError::ConfusableEmail.code(), "confusable_email");
    }
}
