//! Account identity checks: reserved names and homoglyph spoofing.
//!
//! Both checks are independent pure predicates over a single string and
//! can be composed freely by the registration flow.
//!
//! ```rust,ignore
//! use partsguard::identity::{is_dangerous_email, is_reserved, ReservedNames};
//!
//! assert!(is_reserved("localhost"));
//! assert!(is_dangerous_email("\u{0430}dmin@example.com"));
//!
//! let reserved = ReservedNames::new().with_additional(["moderator"]);
//! assert!(reserved.contains("moderator"));
//! ```

mod confusables;
mod reserved;

pub use confusables::{
    confusable_chars, is_dangerous_email, is_dangerous_identifier, is_mixed_script, scripts,
};
pub use reserved::{is_reserved, ReservedNames, DEFAULT_RESERVED_NAMES, RESERVED_PREFIX};
