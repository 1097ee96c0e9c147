//! Listing text checks applied when a part listing is submitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ValidationError;
use crate::profanity;

/// Reject a text field that matches the profanity table.
pub fn validate_listing_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if profanity::test(value) {
        tracing::debug!(field, "listing field rejected");
        return Err(ValidationError::Profanity {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Check every string attribute value; the attribute key names the field.
///
/// Numbers, booleans, arrays and objects are not inspected.
pub fn validate_listing_attributes(attributes: &Map<String, Value>) -> Result<(), ValidationError> {
    for (key, value) in attributes {
        if let Value::String(text) = value {
            validate_listing_text(key, text)?;
        }
    }
    Ok(())
}

/// The user-editable text of a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    /// Listing title
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Free-form key/value attributes (condition, color, part number, ...)
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl ListingDraft {
    /// Validate name, description and attributes, stopping at the first rejection
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_listing_text("name", &self.name)?;
        validate_listing_text("description", &self.description)?;
        validate_listing_attributes(&self.attributes)
    }
}
